#[macro_use]
extern crate flo_sketch;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

use flo_sketch::*;
use clap::{App, Arg};

use std::fs;
use std::process;
use std::f64::consts::PI;

///
/// A spinning star that follows the mouse, with a trail drawn as a Catmull-Rom curve
///
struct Pinwheel {
    trail: Vec<(f64, f64)>
}

impl Game for Pinwheel {
    fn setup(&mut self) {
        info!("Pinwheel ready");
    }

    fn draw(&self, values: &CanvasValues) -> Content {
        let angle       = values.frame_time * PI;
        let mut star    = content![
            background(gray(32.0)),
            stroke(color(255.0, 200.0, 0.0)),
            stroke_weight(2.0),
            push_matrix(),
            translate(values.mouse_x, values.mouse_y),
            rotate(angle),
            fill(color_rgba(255.0, 128.0, 0.0, 200.0)),
            begin_shape()
        ];

        for point in 0..10 {
            let radius  = if point % 2 == 0 { 40.0 } else { 16.0 };
            let theta   = (point as f64) * PI / 5.0;

            star.push(vertex(radius * theta.cos(), radius * theta.sin()));
        }

        star = star + content![end_shape_closed(), pop_matrix()];

        if self.trail.len() >= 4 {
            star.push(no_fill());
            star.push(begin_shape());
            star.extend(self.trail.iter().map(|(x, y)| curve_vertex(*x, *y)));
            star.push(end_shape());
        }

        star + content![
            fill(gray(255.0)),
            text_align(HorizontalAlign::Center, VerticalAlign::Top),
            text(format!("{:.0}, {:.0}", values.mouse_x, values.mouse_y), CanvasValue::relative(0.5), CanvasValue::absolute(8.0)),
            observe("label_width", Observable::TextWidth("000, 000".to_string()))
        ]
    }

    fn mouse_moved(&mut self, values: &CanvasValues) {
        self.trail.push((values.mouse_x, values.mouse_y));

        if self.trail.len() > 8 {
            self.trail.remove(0);
        }
    }
}

fn main() {
    env_logger::init();

    let params = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("config")
            .long("config")
            .short("c")
            .takes_value(true)
            .help("A JSON file containing the sketch configuration"))
        .arg(Arg::with_name("frames")
            .long("frames")
            .short("f")
            .takes_value(true)
            .help("The number of frames to render (default 3)"))
        .get_matches();

    // Read the configuration
    let config = match params.value_of("config") {
        None        => SketchConfig::default(),
        Some(path)  => {
            let loaded = fs::read_to_string(path)
                .map_err(|err| SketchError::Config(err.to_string()))
                .and_then(|json| SketchConfig::from_json(&json));

            match loaded {
                Ok(config)  => config,
                Err(err)    => {
                    error!("Could not load {}: {}", path, err);
                    process::exit(1);
                }
            }
        }
    };

    let num_frames = params.value_of("frames")
        .and_then(|frames| frames.parse::<usize>().ok())
        .unwrap_or(3);

    // Run the sketch, moving the mouse in a circle between frames
    let size        = config.surface_size();
    let mut sketch  = Sketch::new(Pinwheel { trail: vec![] }, config);
    let mut frames  = vec![];

    for frame in 0..num_frames {
        let time        = (frame as f64) / 60.0;
        let (cx, cy)    = (size.width / 2.0, size.height / 2.0);

        sketch.handle_event(InputEvent::MouseMoved { x: cx + 100.0 * (time * 6.0).cos(), y: cy + 100.0 * (time * 6.0).sin() });

        let mut surface = RecordingSurface::new();

        match sketch.render_frame(&mut surface, size, time) {
            Ok(output)  => frames.push(json!({
                "frame":        frame,
                "frame_rate":   sketch.frame_rate(),
                "observed":     output.observed,
                "warnings":     output.warnings,
                "painted":      surface.painted_paths(),
                "text":         surface.text_runs()
            })),

            Err(err)    => {
                error!("Frame {} failed: {}", frame, err);
                process::exit(1);
            }
        }
    }

    match serde_json::to_string_pretty(&frames) {
        Ok(json)    => println!("{}", json),
        Err(err)    => {
            error!("Could not write the frames: {}", err);
            process::exit(1);
        }
    }
}
