// Map output. The pipeline only hands layers to a `MapBackend`; drawing is
// left to Plotly in the browser.
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::error::{ReportError, Result};
use crate::types::RegionVisual;

pub const MAP_TITLE: &str = "Choropleth Map of US States";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub trait MapBackend {
    fn render(&mut self, title: &str, visuals: &[RegionVisual]) -> Result<()>;

    /// Where rendered maps end up, for the console report.
    fn destination(&self) -> String;
}

/// One single-colour choropleth layer for a state.
fn layer(visual: &RegionVisual) -> Value {
    let color = format!("rgba(0, 0, 255, {:.2})", visual.intensity);
    json!({
        "type": "choropleth",
        "locationmode": "USA-states",
        "locations": [visual.code],
        "z": [1],
        "colorscale": [[0, color], [1, color]],
        "showscale": false,
        "name": visual.region,
    })
}

pub fn figure(title: &str, visuals: &[RegionVisual]) -> Value {
    json!({
        "data": visuals.iter().map(layer).collect::<Vec<_>>(),
        "layout": {
            "title": { "text": title },
            "geo": {
                "scope": "usa",
                "projection": { "type": "albers usa" },
                "showlakes": true,
                "lakecolor": "rgb(255, 255, 255)",
            },
        },
    })
}

/// Writes a standalone HTML page that draws the figure with Plotly.
pub struct PlotlyHtml {
    pub path: PathBuf,
}

impl PlotlyHtml {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PlotlyHtml { path: path.into() }
    }

    pub fn html(title: &str, visuals: &[RegionVisual]) -> Result<String> {
        let fig = serde_json::to_string(&figure(title, visuals))
            .map_err(|e| ReportError::Render(e.to_string()))?;
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
             <script src=\"{PLOTLY_CDN}\"></script>\n</head>\n<body>\n\
             <div id=\"map\" style=\"width:100%;height:90vh;\"></div>\n\
             <script>\nconst fig = {fig};\nPlotly.newPlot(\"map\", fig.data, fig.layout);\n</script>\n\
             </body>\n</html>\n"
        ))
    }
}

impl MapBackend for PlotlyHtml {
    fn render(&mut self, title: &str, visuals: &[RegionVisual]) -> Result<()> {
        let page = Self::html(title, visuals)?;
        std::fs::write(&self.path, page).map_err(|source| ReportError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!(
            "rendered {} layers to {}",
            visuals.len(),
            self.path.display()
        );
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::test_support::ScratchDir;

    fn visual(region: &str, code: &'static str, intensity: f64) -> RegionVisual {
        RegionVisual {
            region: region.to_string(),
            code,
            intensity,
        }
    }

    #[test]
    fn one_layer_per_visual_with_its_intensity() {
        let visuals = vec![visual("Texas", "TX", 1.0), visual("Ohio", "OH", 0.9)];
        let fig = figure(MAP_TITLE, &visuals);
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["locations"][0], "TX");
        assert_eq!(data[0]["locationmode"], "USA-states");
        assert_eq!(data[1]["colorscale"][0][1], "rgba(0, 0, 255, 0.90)");
        assert_eq!(data[1]["showscale"], false);
        assert_eq!(fig["layout"]["geo"]["scope"], "usa");
        assert_eq!(fig["layout"]["title"]["text"], MAP_TITLE);
    }

    #[test]
    fn html_backend_writes_page() {
        let dir = ScratchDir::new("render");
        let path = dir.0.join("map.html");
        let mut backend = PlotlyHtml::new(&path);
        backend
            .render(MAP_TITLE, &[visual("Utah", "UT", 1.0)])
            .unwrap();
        assert_eq!(backend.destination(), path.display().to_string());
        let page = std::fs::read_to_string(&path).unwrap();
        assert!(page.contains("Plotly.newPlot"));
        assert!(page.contains("\"UT\""));
    }

    #[test]
    fn html_backend_reports_unwritable_target() {
        let dir = ScratchDir::new("render_fail");
        let mut backend = PlotlyHtml::new(dir.0.join("missing").join("map.html"));
        assert!(matches!(
            backend.render(MAP_TITLE, &[]),
            Err(ReportError::Io { .. })
        ));
    }
}
