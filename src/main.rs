use arboard::Clipboard;
use macroquad::prelude::*;
use rustlight::render::MacroquadSurface;
use rustlight::{Config, FrameStyle, Point, Scene, SceneLayout};

/// Scene layout from the configured JSON file, or the built-in one
fn load_layout(config: &Config) -> anyhow::Result<SceneLayout> {
    match &config.scene.layout_path {
        Some(path) => {
            let layout = SceneLayout::load_from_file(path)?;
            println!("Loaded scene layout from {}", path);
            Ok(layout)
        }
        None => Ok(SceneLayout {
            width: config.canvas.width,
            height: config.canvas.height,
            ..SceneLayout::default()
        }),
    }
}

/// Print the light's visibility polygon for a fixed position and exit
fn run_headless(scene: &mut Scene, x: &str, y: &str) -> anyhow::Result<()> {
    let x: f64 = x.parse()?;
    let y: f64 = y.parse()?;
    scene.set_light(x, y);
    println!("{}", scene.visibility()?.to_json()?);
    Ok(())
}

/// Visualization state
struct AppState {
    scene: Scene,
    style: FrameStyle,
    last_error: Option<String>,
}

impl AppState {
    fn new(scene: Scene, style: FrameStyle) -> Self {
        AppState {
            scene,
            style,
            last_error: None,
        }
    }

    /// Follow the mouse, staying strictly inside the border
    fn handle_mouse(&mut self) {
        let (mouse_x, mouse_y) = mouse_position();
        let light = self
            .scene
            .clamp_inside(Point::new(mouse_x as f64, mouse_y as f64));
        self.scene.set_light(light.x, light.y);
    }

    fn report(&mut self, error: anyhow::Error) {
        let message = format!("{:#}", error);
        if self.last_error.as_deref() != Some(message.as_str()) {
            eprintln!("Frame skipped: {}", message);
            self.last_error = Some(message);
        }
    }

    fn copy_to_clipboard(&mut self) {
        let json = match self.scene.visibility().and_then(|polygon| polygon.to_json()) {
            Ok(json) => json,
            Err(e) => return self.report(e),
        };
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(json) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Visibility polygon copied to clipboard!");
                    // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn draw(&mut self) {
        let style = &self.style;
        let drawn = self.scene.compose().map(|frame| {
            frame.render(&mut MacroquadSurface, style);
            frame.primary().map_or(0, |polygon| polygon.len())
        });
        let rays = match drawn {
            Ok(rays) => rays,
            Err(e) => {
                clear_background(BLACK);
                self.report(e);
                0
            }
        };

        let light = self.scene.light();
        let info = format!(
            "Light: ({:.0}, {:.0})  Rays: {}  Buddies: {}  Ray overlay: {}",
            light.x,
            light.y,
            rays,
            if self.scene.buddies.enabled { "on" } else { "off" },
            if self.style.show_rays { "on" } else { "off" },
        );
        draw_text(&info, 10.0, 20.0, 20.0, GRAY);
        draw_text("B: buddies  R: rays  C: copy polygon  Esc: close", 10.0, 40.0, 20.0, GRAY);
    }
}

fn window_conf() -> Conf {
    let config = Config::read().unwrap_or_default();
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: config.canvas.width as i32,
        window_height: config.canvas.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();

    let scene = load_layout(&config).and_then(|layout| Scene::from_config(&config, &layout));
    let mut scene = match scene {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to build scene: {:#}", e);
            return;
        }
    };

    // Check command line arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 && args[1] == "--headless" {
        if let Err(e) = run_headless(&mut scene, &args[2], &args[3]) {
            eprintln!("Error: {:#}", e);
        }
        return;
    }

    let mut state = AppState::new(scene, FrameStyle::from_config(&config));

    loop {
        state.handle_mouse();

        if is_key_pressed(KeyCode::B) {
            state.scene.buddies.enabled = !state.scene.buddies.enabled;
        }

        if is_key_pressed(KeyCode::R) {
            state.style.show_rays = !state.style.show_rays;
        }

        if is_key_pressed(KeyCode::C) {
            state.copy_to_clipboard();
        }

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.draw();

        next_frame().await
    }
}
