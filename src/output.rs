use std::io::Write;

use anyhow::Context;
use ledgrid_layout::Model;

/// Serializes a model as a JSON array of `{"point": [x, y, z]}` objects.
pub fn render_model(model: &Model, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(model)
    } else {
        serde_json::to_string(model)
    }
}

/// Writes the whole document, followed by a newline, in a single write.
///
/// Nothing reaches `writer` unless serialization succeeded.
pub fn write_model<W: Write>(writer: &mut W, model: &Model, pretty: bool) -> anyhow::Result<()> {
    let mut text = render_model(model, pretty).context("Failed to serialize model")?;
    text.push('\n');
    writer
        .write_all(text.as_bytes())
        .context("Failed to write model")?;
    writer.flush().context("Failed to flush model output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgrid_layout::{GridLayout, Preset};
    use serde_json::{Value, json};

    #[test]
    fn test_render_small_grid() {
        let model = Preset::Grid32x16.layout().model();
        let value: Value = serde_json::from_str(&render_model(&model, false).unwrap()).unwrap();
        let records = value.as_array().unwrap();

        assert_eq!(records.len(), 512);
        assert_eq!(records[0], json!({ "point": [1.9375, 0.0, 0.9375] }));
        assert_eq!(records[16], json!({ "point": [1.8125, 0.0, -0.9375] }));
        assert!(
            records
                .iter()
                .all(|r| r.as_object().is_some_and(|o| o.len() == 1 && o.contains_key("point")))
        );
    }

    #[test]
    fn test_render_stacked_grid() {
        let model = Preset::Grid64x32.layout().model();
        let value: Value = serde_json::from_str(&render_model(&model, false).unwrap()).unwrap();
        let records = value.as_array().unwrap();

        assert_eq!(records.len(), 2048);
        assert_eq!(records[1024], json!({ "point": [1.96875, 0.0, -0.03125] }));
    }

    #[test]
    fn test_compact_output_text() {
        // 2x2 snake: down the first column, back up the second
        let model = GridLayout::new(2, 2, 1, -0.5).unwrap().model();
        assert_eq!(
            render_model(&model, false).unwrap(),
            "[{\"point\":[0.25,0.0,0.25]},{\"point\":[0.25,0.0,-0.25]},\
             {\"point\":[-0.25,0.0,-0.25]},{\"point\":[-0.25,0.0,0.25]}]"
        );

        let text = render_model(&Preset::Grid32x16.layout().model(), false).unwrap();
        assert!(text.starts_with("[{\"point\":[1.9375,0.0,0.9375]},{\"point\":[1.9375,0.0,0.8125]},"));
        assert!(text.ends_with("{\"point\":[-1.9375,0.0,0.9375]}]"));
    }

    #[test]
    fn test_compact_output_is_one_line() {
        let model = GridLayout::new(4, 2, 1, -1.0).unwrap().model();
        let mut buf = Vec::new();
        write_model(&mut buf, &model, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("[{\"point\":["));
        assert!(text.ends_with("]\n"));
        assert_eq!(text.matches('\n').count(), 1);
    }

    #[test]
    fn test_pretty_output_parses_to_same_document() {
        let model = GridLayout::new(3, 3, 2, 0.5).unwrap().model();
        let pretty = render_model(&model, true).unwrap();
        let compact = render_model(&model, false).unwrap();

        assert!(pretty.lines().count() > 1);
        assert_eq!(
            serde_json::from_str::<Value>(&pretty).unwrap(),
            serde_json::from_str::<Value>(&compact).unwrap()
        );
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_model(&mut first, &Preset::Grid64x32.layout().model(), false).unwrap();
        write_model(&mut second, &Preset::Grid64x32.layout().model(), false).unwrap();
        assert_eq!(first, second);
    }
}
