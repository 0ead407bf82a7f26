//! Stylesheet and per-container theme properties.
//!
//! The stylesheet is static and installed once per document. Colors never
//! go into it; they are published as custom properties on each container,
//! so players with different themes can share the same rules.

use crate::config::{ColorField, Configuration};

/// Id of the shared `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "video-player-styles";

pub const STYLESHEET: &str = r#"
.video-player-container {
  position: relative;
  width: 100%;
  height: 100%;
  background: #000;
  overflow: hidden;
}
.video-player-container video {
  width: 100%;
  height: 100%;
  display: block;
}
.video-player-container .controls {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 8px 12px;
  background: var(--controls-bg);
  color: var(--text-color);
  font-family: sans-serif;
  user-select: none;
}
.video-player-container .progress-area {
  position: relative;
  height: 5px;
  margin-bottom: 8px;
  background: rgba(255, 255, 255, 0.25);
  cursor: pointer;
}
.video-player-container .progress-bar {
  width: 0%;
  height: 100%;
  background-color: var(--progress-color);
  pointer-events: none;
}
.video-player-container .controls-list {
  display: flex;
  align-items: center;
  justify-content: space-between;
}
.video-player-container .controls-left,
.video-player-container .controls-right {
  display: flex;
  align-items: center;
  gap: 8px;
}
.video-player-container .icon {
  display: inline-flex;
  cursor: pointer;
}
.video-player-container .volume-container {
  display: flex;
  align-items: center;
  gap: 4px;
}
.video-player-container .volume-range {
  width: 80px;
  accent-color: var(--volume-slider);
}
.video-player-container .timer {
  font-size: 13px;
  white-space: nowrap;
}
"#;

/// The four theme custom properties for `config`, in a fixed order.
pub fn custom_properties(config: &Configuration) -> [(&'static str, &str); 4] {
    ColorField::ALL.map(|field| (field.custom_property(), config.color(field).as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_custom_properties() {
        let declarations = custom_properties(&Configuration::default())
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        insta::assert_snapshot!(
            declarations,
            @"--progress-color: #ffa600; --controls-bg: rgba(0, 0, 0, 0.7); --volume-slider: #ffffff; --text-color: #ffffff;"
        );
    }

    #[test]
    fn test_stylesheet_reads_every_property() {
        for field in ColorField::ALL {
            let reference = format!("var({})", field.custom_property());
            assert!(
                STYLESHEET.contains(&reference),
                "stylesheet never reads {}",
                field.custom_property()
            );
        }
    }
}
