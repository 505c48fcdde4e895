use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colorf::codec::{Bgra32, PixelCodec};
use colorf::config::{Config, Representation};
use colorf::{PremultipliedColor, StraightColor};

#[derive(Parser, Debug)]
#[command(name = "colorf")]
#[command(version, about = "Straight and premultiplied RGBA color tool for Cairo pixel data")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a hex color (#RGB, #RGBA, #RRGGBB, #RRGGBBAA) or color name
    Parse {
        /// Color to parse
        color: String,
    },
    /// Composite SRC over DST
    Over {
        /// Source color (top)
        src: String,
        /// Destination color (bottom)
        dst: String,
        /// Composite in straight alpha instead of the configured representation
        #[arg(long)]
        straight: bool,
    },
    /// Encode a color as BGRA32 bytes
    Encode {
        /// Color to encode
        color: String,
        /// Premultiply before encoding, as Cairo ARgb32 surfaces store pixels
        #[arg(long)]
        premultiplied: bool,
    },
    /// Decode BGRA32 bytes into a color
    Decode {
        #[arg(value_name = "B")]
        b: u8,
        #[arg(value_name = "G")]
        g: u8,
        #[arg(value_name = "R")]
        r: u8,
        #[arg(value_name = "A")]
        a: u8,
        /// Treat the bytes as premultiplied and unpremultiply them
        #[arg(long)]
        premultiplied: bool,
    },
    /// Print the configuration file JSON schema
    Schema,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("Failed to load config: {err:#}");
        Config::default()
    });
    let precision = config.output.precision;

    match cli.command {
        Command::Parse { color } => {
            let color = resolve(&config, &color)?;
            println!("hex:           {}", color.to_rgba8());
            println!("straight:      {}", format_channels(color.to_array(), precision));
            println!(
                "premultiplied: {}",
                format_channels(color.premultiply().to_array(), precision)
            );
        }
        Command::Over { src, dst, straight } => {
            let src = resolve(&config, &src)?;
            let dst = resolve(&config, &dst)?;
            let representation = if straight {
                Representation::Straight
            } else {
                config.compositing.representation
            };
            log::debug!("Compositing in {:?} alpha", representation);
            let out = match representation {
                Representation::Straight => src.over(dst),
                Representation::Premultiplied => src.premultiply().over(dst.premultiply()).into(),
            };
            println!("hex:      {}", out.to_rgba8());
            println!("straight: {}", format_channels(out.to_array(), precision));
        }
        Command::Encode {
            color,
            premultiplied,
        } => {
            let color = resolve(&config, &color)?;
            let mut bytes = [0u8; Bgra32::SIZE];
            if premultiplied {
                Bgra32.encode(&mut bytes, color.premultiply())?;
            } else {
                Bgra32.encode(&mut bytes, color)?;
            }
            println!(
                "bgra32: {:02x} {:02x} {:02x} {:02x}",
                bytes[0], bytes[1], bytes[2], bytes[3]
            );
        }
        Command::Decode {
            b,
            g,
            r,
            a,
            premultiplied,
        } => {
            let bytes = [b, g, r, a];
            let color: StraightColor = if premultiplied {
                Bgra32.decode::<PremultipliedColor>(&bytes)?.into()
            } else {
                Bgra32.decode(&bytes)?
            };
            println!("hex:      {}", color.to_rgba8());
            println!("straight: {}", format_channels(color.to_array(), precision));
        }
        Command::Schema => {
            let schema = Config::json_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

/// Resolves a hex color or a configured/builtin color name.
fn resolve(config: &Config, spec: &str) -> Result<StraightColor> {
    if spec.starts_with('#') {
        return Ok(spec.parse::<StraightColor>()?);
    }
    config
        .resolve_color(spec)
        .with_context(|| format!("Unknown color '{spec}'"))
}

fn format_channels([r, g, b, a]: [f64; 4], precision: usize) -> String {
    format!("r={r:.precision$} g={g:.precision$} b={b:.precision$} a={a:.precision$}")
}
