use crate::geometry::Point;
use crate::shape::Shape;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Canvas size plus the vertex lists of the interior obstacles
/// The border is not stored; the scene always adds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub width: f64,
    pub height: f64,
    pub obstacles: Vec<Vec<[f64; 2]>>,
}

impl Default for SceneLayout {
    /// Five obstacles scattered over a 1000x600 canvas
    fn default() -> Self {
        SceneLayout {
            width: 1000.0,
            height: 600.0,
            obstacles: vec![
                vec![[10.0, 10.0], [120.0, 120.0], [10.0, 50.0]],
                vec![[600.0, 50.0], [450.0, 250.0], [230.0, 150.0]],
                vec![[50.0, 350.0], [100.0, 350.0], [60.0, 200.0], [20.0, 180.0]],
                vec![[800.0, 500.0], [900.0, 400.0], [870.0, 320.0], [760.0, 410.0]],
                vec![
                    [300.0, 300.0],
                    [310.0, 580.0],
                    [510.0, 420.0],
                    [560.0, 500.0],
                    [550.0, 280.0],
                ],
            ],
        }
    }
}

impl SceneLayout {
    pub fn from_json(json: &str) -> Result<Self> {
        let layout: SceneLayout =
            serde_json::from_str(json).context("Failed to parse scene layout")?;
        if !(layout.width > 0.0 && layout.height > 0.0) {
            bail!(
                "scene layout needs a positive canvas size, got {}x{}",
                layout.width,
                layout.height
            );
        }
        Ok(layout)
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene layout {}", path))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the interior obstacles, failing on the first invalid one
    pub fn shapes(&self) -> Result<Vec<Shape>> {
        self.obstacles
            .iter()
            .enumerate()
            .map(|(i, vertices)| {
                let points = vertices.iter().map(|&[x, y]| Point::new(x, y)).collect();
                Shape::new(points).with_context(|| format!("obstacle #{} is invalid", i))
            })
            .collect()
    }
}
