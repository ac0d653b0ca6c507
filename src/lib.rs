pub mod config;
pub mod geometry;
pub mod layout;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shape;
pub mod surface;
pub mod visibility;

pub use config::Config;
pub use geometry::{LineSegment, Point};
pub use layout::SceneLayout;
pub use ray::{ParallelPolicy, Ray};
pub use scene::{Frame, FrameStyle, Scene};
pub use shape::Shape;
pub use surface::{CommandList, DrawCommand, Rgba, Surface};
pub use visibility::{JitterFan, VisibilityPolygon, VisibilitySolver};
