//! Program runners
//!
//! Each runner takes the arguments that followed its command name and writes
//! its normal output to `out`. Argument problems come back as
//! [`LabError::InvalidArgument`] carrying the usage line; `main` turns every
//! error into a message on stderr and an exit code.

use super::config::Command;
use crate::arith::{divide, median, subtract_is_safe, sum, Word};
use crate::constants::DEFAULT_LIST_INDEX;
use crate::errors::{LabError, Result};
use crate::list::IntList;
use crate::rle::{Bitmap, Palette};
use crate::{ui, wc};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

fn usage_error(command: Command, problem: impl Into<String>) -> LabError {
    LabError::invalid(format!("{}\nUsage: {}", problem.into(), command.usage()))
}

fn expect_args(command: Command, args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(usage_error(
            command,
            format!("expected {} arguments, got {}", expected, args.len()),
        ));
    }
    Ok(())
}

fn parse_int(arg: &str) -> Result<i32> {
    arg.trim()
        .parse::<i32>()
        .map_err(|_| LabError::invalid(format!("'{}' is not a 32-bit integer", arg)))
}

fn parse_number(arg: &str) -> Result<f64> {
    arg.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LabError::invalid(format!("'{}' is not a finite number", arg)))
}

/// `divide int1 int2`
pub fn run_divide(args: &[String], out: &mut dyn Write) -> Result<()> {
    expect_args(Command::Divide, args, 2)?;
    let division = divide(parse_int(&args[0])?, parse_int(&args[1])?)?;
    write!(out, "{}", division)?;
    Ok(())
}

/// `middle x y z`, or `middle` alone which prints `0`
pub fn run_middle(args: &[String], out: &mut dyn Write) -> Result<()> {
    if args.is_empty() {
        writeln!(out, "0")?;
        return Ok(());
    }
    expect_args(Command::Middle, args, 3)?;

    let x = parse_number(&args[0])?;
    let y = parse_number(&args[1])?;
    let z = parse_number(&args[2])?;
    writeln!(out, "{:.6}", median(x, y, z))?;
    Ok(())
}

/// `sum bin1 bin2`
pub fn run_sum(args: &[String], out: &mut dyn Write) -> Result<()> {
    expect_args(Command::Sum, args, 2)?;
    let x = Word::parse(&args[0])?;
    let y = Word::parse(&args[1])?;
    out.write_all(sum(&x, &y).report().as_bytes())?;
    Ok(())
}

/// `subsafe x y`
pub fn run_subsafe(args: &[String], out: &mut dyn Write) -> Result<()> {
    expect_args(Command::SubSafe, args, 2)?;
    let safe = subtract_is_safe(parse_int(&args[0])?, parse_int(&args[1])?);
    writeln!(out, "{}", u8::from(safe))?;
    Ok(())
}

/// `wc`: count `input` until end of input.
///
/// `interactive` is true when input comes from a terminal; the prompt is only
/// shown then.
pub fn run_wc(
    args: &[String],
    input: &mut dyn Read,
    interactive: bool,
    out: &mut dyn Write,
) -> Result<()> {
    expect_args(Command::Wc, args, 0)?;

    if interactive {
        writeln!(out, "Enter text (Ctrl-D to end input):")?;
        out.flush()?;
    }
    let counts = wc::count(input)?;
    if interactive {
        writeln!(out)?;
    }
    write!(out, "{}", counts)?;
    Ok(())
}

/// `list [insert|split] [index]`
///
/// Builds the demo lists (target `0..=9`, source `-3, -4, -5`) and either
/// splices the source into the target or splits the target.
pub fn run_list(args: &[String], out: &mut dyn Write, verbose: bool) -> Result<()> {
    let (mode, index) = match args {
        [] => ("insert", None),
        [mode] if mode == "insert" || mode == "split" => (mode.as_str(), None),
        [index] => ("insert", Some(index)),
        [mode, index] if mode == "insert" || mode == "split" => (mode.as_str(), Some(index)),
        _ => return Err(usage_error(Command::List, "unrecognized list arguments")),
    };
    let index = match index {
        Some(arg) => arg
            .trim()
            .parse::<usize>()
            .map_err(|_| usage_error(Command::List, format!("'{}' is not an index", arg)))?,
        None => DEFAULT_LIST_INDEX,
    };

    let mut target: IntList = (0..10).collect();
    if verbose {
        eprintln!("Target list: {}", target);
    }

    if mode == "split" {
        let back = target.split_at(index);
        writeln!(out, "front: {}", target)?;
        writeln!(out, "back:  {}", back)?;
    } else {
        let source: IntList = [-3, -4, -5].into_iter().collect();
        if verbose {
            eprintln!("Inserting {} at index {}", source, index);
        }
        target.insert_all(index, &source)?;
        writeln!(out, "{}", target)?;
    }
    target.free();
    Ok(())
}

/// Parsed `bitmap` arguments
#[derive(Debug, Clone)]
pub struct BitmapArgs {
    pub path: String,
    pub view: bool,
    pub palette: Palette,
}

impl BitmapArgs {
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut path = None;
        let mut view = false;
        let mut palette = Palette::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--view" => view = true,
                "--glyph" => {
                    i += 1;
                    let arg = args
                        .get(i)
                        .ok_or_else(|| usage_error(Command::Bitmap, "--glyph requires VALUE=CHAR"))?;
                    let (value, glyph) = Palette::parse_override(arg)?;
                    palette = palette.with(value, glyph);
                }
                flag if flag.starts_with("--") => {
                    return Err(usage_error(Command::Bitmap, format!("unknown option: {}", flag)));
                }
                arg if path.is_none() => path = Some(arg.to_string()),
                _ => return Err(usage_error(Command::Bitmap, "too many arguments")),
            }
            i += 1;
        }

        let path = path.ok_or_else(|| usage_error(Command::Bitmap, "no filename given"))?;
        Ok(BitmapArgs {
            path,
            view,
            palette,
        })
    }
}

/// `bitmap filename [--view] [--glyph VALUE=CHAR]...`
pub fn run_bitmap(args: &[String], out: &mut dyn Write, verbose: bool) -> Result<()> {
    let options = BitmapArgs::parse(args)?;

    if verbose {
        eprintln!("Reading {}...", options.path);
    }
    let file = File::open(&options.path)?;
    let bitmap = Bitmap::parse(BufReader::new(file))?;
    if verbose {
        eprintln!(
            "Decoded {} rows, widest row has {} cells.",
            bitmap.height(),
            bitmap.width()
        );
    }

    let rows = bitmap.render(&options.palette);
    if options.view {
        let title = Path::new(&options.path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| options.path.clone());
        ui::run_viewer(rows, title)?;
    } else {
        for row in rows {
            writeln!(out, "{}", row)?;
        }
    }
    Ok(())
}
