//! Prints the model of a single 32x16 zig-zag grid as JSON.

use ledgrid_layout::Preset;

fn main() {
    let model = Preset::Grid32x16.layout().model();

    match serde_json::to_string(&model) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize model: {:?}", e);
            std::process::exit(1);
        }
    }
}
