//! Prints the model of a 64x32 panel, built from two stacked 64x16 zig-zag
//! grids, as JSON.

use ledgrid_layout::Preset;

fn main() {
    let layout = Preset::Grid64x32.layout();
    let model = layout.model();

    match serde_json::to_string(&model) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize {} point model: {:?}", layout.len(), e);
            std::process::exit(1);
        }
    }
}
