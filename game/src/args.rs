use std::path::PathBuf;

use backend::{RenderBackend, Rgba, WindowConfig};

pub const USAGE: &str = "Usage: red_planet [OPTIONS]

Opens a window, fills it with a solid color, holds it on screen and exits.

Options:
  -c, --config <file>   Load window settings from a TOML file.
      --title <text>    Window title (default: tile).
      --size <WxH>      Window size in pixels (default: 600x400).
      --color <hex>     Clear color as #rrggbb or #rrggbbaa (default: #00ff00).
      --hold <ms>       How long to keep the window open (default: 5000).
      --gl              Clear through an OpenGL context instead of the SDL renderer.
      --vsync           Request vsync'd presentation.
  -h, --help            Show this help message and exit.

Options given on the command line override the config file.
Set RUST_LOG=debug for a step-by-step trace.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub title: Option<String>,
    pub size: Option<(u32, u32)>,
    pub color: Option<Rgba>,
    pub hold_ms: Option<u64>,
    pub gl: bool,
    pub vsync: bool,
    pub help: bool,
}

impl Args {
    /// Parses everything after the program name.
    pub fn parse<I>(args: I) -> Result<Args, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = Args::default();
        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            let mut value = |name: &str| it.next().ok_or_else(|| format!("Missing value for {name}"));
            match arg.as_str() {
                "-h" | "--help" => out.help = true,
                "-c" | "--config" => out.config = Some(PathBuf::from(value(&arg)?)),
                "--title" => out.title = Some(value(&arg)?),
                "--size" => out.size = Some(parse_size(&value(&arg)?)?),
                "--color" => out.color = Some(value(&arg)?.parse()?),
                "--hold" => {
                    let v = value(&arg)?;
                    let ms = v
                        .parse()
                        .map_err(|e| format!("Invalid --hold value {v:?}: {e}"))?;
                    out.hold_ms = Some(ms);
                }
                "--gl" => out.gl = true,
                "--vsync" => out.vsync = true,
                s => return Err(format!("Unknown option {s}")),
            }
        }
        Ok(out)
    }

    /// Applies command line overrides on top of `cfg`.
    pub fn apply(&self, mut cfg: WindowConfig) -> WindowConfig {
        if let Some(title) = &self.title {
            cfg.title = title.clone();
        }
        if let Some((w, h)) = self.size {
            cfg.width = w;
            cfg.height = h;
        }
        if let Some(color) = self.color {
            cfg.color = color;
        }
        if let Some(ms) = self.hold_ms {
            cfg.hold_ms = ms;
        }
        if self.gl {
            cfg.backend = RenderBackend::OpenGl;
        }
        if self.vsync {
            cfg.vsync = true;
        }
        cfg
    }
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let err = || format!("Invalid --size value {s:?}, expected WxH");
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(err)?;
    let w = w.trim().parse().map_err(|_| err())?;
    let h = h.trim().parse().map_err(|_| err())?;
    Ok((w, h))
}
