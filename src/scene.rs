use crate::config::Config;
use crate::geometry::Point;
use crate::layout::SceneLayout;
use crate::shape::Shape;
use crate::surface::{Rgba, Surface};
use crate::visibility::{JitterFan, VisibilityPolygon, VisibilitySolver};
use anyhow::{bail, Result};

/// Distance kept between a light source and the border
pub const BORDER_INSET: f64 = 1.0;

/// Light offsets for the soft shadow: the light itself, then four axis and four
/// diagonal neighbours at `distance`
pub fn buddy_offsets(distance: f64) -> [(f64, f64); 9] {
    let diag = 0.5_f64.sqrt() * distance;
    [
        (0.0, 0.0),
        (distance, 0.0),
        (-distance, 0.0),
        (0.0, distance),
        (0.0, -distance),
        (diag, diag),
        (diag, -diag),
        (-diag, diag),
        (-diag, -diag),
    ]
}

/// Extra light sources drawn faintly around the real one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Buddies {
    pub enabled: bool,
    pub distance: f64,
    pub opacity: f32,
}

impl Default for Buddies {
    fn default() -> Self {
        Buddies {
            enabled: true,
            distance: 7.0,
            opacity: 0.2,
        }
    }
}

/// Obstacles, the light, and how visibility is sampled
pub struct Scene {
    width: f64,
    height: f64,
    shapes: Vec<Shape>,
    light: Point,
    solver: VisibilitySolver,
    pub buddies: Buddies,
}

impl Scene {
    /// Empty scene enclosed by its border
    pub fn new(width: f64, height: f64, light: Point, solver: VisibilitySolver) -> Self {
        Scene {
            width,
            height,
            shapes: Shape::border(width, height),
            light,
            solver,
            buddies: Buddies::default(),
        }
    }

    pub fn from_config(config: &Config, layout: &SceneLayout) -> Result<Self> {
        let fan = if config.sampling.jitter > 0.0 {
            JitterFan::scaled(config.sampling.jitter)
        } else {
            JitterFan::single()
        };
        let solver = VisibilitySolver::new(fan, config.sampling.parallel);
        let light = Point::new(config.light.start_x, config.light.start_y);

        let mut scene = Scene::new(layout.width, layout.height, light, solver);
        scene.add_shapes(layout.shapes()?)?;
        scene.buddies = Buddies {
            enabled: config.buddies.enabled,
            distance: config.buddies.distance,
            opacity: config.buddies.opacity,
        };
        Ok(scene)
    }

    /// Add an obstacle. Outlines cannot block light and are refused.
    pub fn add_shape(&mut self, shape: Shape) -> Result<()> {
        if !shape.is_occluder() {
            bail!("only closed shapes can be added as obstacles");
        }
        self.shapes.push(shape);
        Ok(())
    }

    pub fn add_shapes(&mut self, shapes: impl IntoIterator<Item = Shape>) -> Result<()> {
        for shape in shapes {
            self.add_shape(shape)?;
        }
        Ok(())
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn light(&self) -> Point {
        self.light
    }

    pub fn set_light(&mut self, x: f64, y: f64) {
        self.light.set(x, y);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pull `p` into the open border rectangle, at least `BORDER_INSET` from each edge
    pub fn clamp_inside(&self, p: Point) -> Point {
        let inset_x = BORDER_INSET.min(self.width / 2.0);
        let inset_y = BORDER_INSET.min(self.height / 2.0);
        Point::new(
            p.x.clamp(inset_x, self.width - inset_x),
            p.y.clamp(inset_y, self.height - inset_y),
        )
    }

    /// Visibility polygon of the light itself
    pub fn visibility(&self) -> Result<VisibilityPolygon> {
        self.solver.solve(self.light, &self.shapes)
    }

    /// Visibility polygon seen from `source` instead of the light
    pub fn visibility_from(&self, source: Point) -> Result<VisibilityPolygon> {
        self.solver.solve(source, &self.shapes)
    }

    /// Compute every light layer for the current light position.
    /// Buddies that would fall outside the border are clamped back inside.
    pub fn compose(&self) -> Result<Frame<'_>> {
        let buddies = buddy_offsets(self.buddies.distance);
        let offsets = if self.buddies.enabled {
            &buddies[..]
        } else {
            &buddies[..1]
        };

        let mut layers = Vec::with_capacity(offsets.len());
        for (i, &(dx, dy)) in offsets.iter().enumerate() {
            let source = if i == 0 {
                self.light
            } else {
                self.clamp_inside(self.light.offset(dx, dy))
            };
            layers.push(LightLayer {
                source,
                polygon: self.visibility_from(source)?,
                opacity: if i == 0 { 1.0 } else { self.buddies.opacity },
            });
        }

        Ok(Frame {
            obstacles: &self.shapes,
            light: self.light,
            layers,
        })
    }
}

/// One light source's visibility polygon and how strongly it is drawn
#[derive(Debug, Clone)]
pub struct LightLayer {
    pub source: Point,
    pub polygon: VisibilityPolygon,
    pub opacity: f32,
}

/// Colours and switches used when drawing a frame
#[derive(Debug, Clone)]
pub struct FrameStyle {
    pub background: Rgba,
    pub obstacle: Rgba,
    pub glow: Rgba,
    pub light: Rgba,
    pub light_radius: f64,
    pub stroke_width: f32,
    pub show_rays: bool,
}

impl Default for FrameStyle {
    fn default() -> Self {
        FrameStyle {
            background: Rgba::BLACK,
            obstacle: Rgba::WHITE,
            glow: Rgba::WHITE,
            light: Rgba::ORANGE,
            light_radius: 4.0,
            stroke_width: 2.0,
            show_rays: false,
        }
    }
}

impl FrameStyle {
    pub fn from_config(config: &Config) -> Self {
        FrameStyle {
            background: config.visual.background,
            obstacle: config.visual.obstacle,
            glow: config.visual.glow,
            light: config.visual.light,
            light_radius: config.light.radius,
            stroke_width: config.visual.stroke_width,
            show_rays: config.visual.show_rays,
        }
    }
}

/// Everything needed to draw one frame
pub struct Frame<'a> {
    obstacles: &'a [Shape],
    light: Point,
    pub layers: Vec<LightLayer>,
}

impl Frame<'_> {
    /// The layer for the real light (always first)
    pub fn primary(&self) -> Option<&VisibilityPolygon> {
        self.layers.first().map(|layer| &layer.polygon)
    }

    pub fn render(&self, surface: &mut impl Surface, style: &FrameStyle) {
        surface.clear(style.background);

        for shape in self.obstacles {
            surface.stroke_polygon(shape.points(), style.obstacle, style.stroke_width);
        }

        for layer in &self.layers {
            let color = style.glow.with_alpha(style.glow.a * layer.opacity);
            surface.fill_polygon(layer.source, layer.polygon.points(), color);
            surface.stroke_polygon(layer.polygon.points(), color, style.stroke_width);
        }

        if style.show_rays {
            if let Some(primary) = self.primary() {
                let color = style.light.with_alpha(0.5);
                for &hit in primary.points() {
                    surface.stroke_line(primary.source, hit, color, 1.0);
                }
            }
        }

        surface.fill_circle(self.light, style.light_radius, style.light);
    }
}
