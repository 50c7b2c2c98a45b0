use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, BufRead, Write};

use tensor_lab_core::format::banner;
use tensor_lab_core::LabRng;
use tensor_lab_demos::{Demo, LabConfig};

/// What one line of menu input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Run(Demo),
    Invalid(i64),
}

/// `None` when the line is not an integer; such lines are ignored.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    let n = line.trim().parse::<i64>().ok()?;
    if n == 0 {
        return Some(MenuChoice::Exit);
    }
    Some(match Demo::from_number(n) {
        Some(demo) => MenuChoice::Run(demo),
        None => MenuChoice::Invalid(n),
    })
}

/// Menu loop: show options, read a choice, run it, wait for Enter.
///
/// Returns when `0` is chosen or the input is exhausted.
pub fn run_loop<R, W>(
    input: &mut R,
    out: &mut W,
    rng: &mut LabRng,
    config: &LabConfig,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        render_menu(out)?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => {
                log::info!("input closed at menu prompt");
                break;
            }
        };

        match parse_choice(&line) {
            None => continue,
            Some(MenuChoice::Exit) => break,
            Some(MenuChoice::Invalid(n)) => {
                log::debug!("rejected menu choice {n}");
                execute!(
                    out,
                    SetForegroundColor(Color::Red),
                    Print(format!("Invalid choice {n}, please pick 0-{}.\n", Demo::ALL.len())),
                    ResetColor
                )?;
            }
            Some(MenuChoice::Run(demo)) => {
                log::debug!("running demo {} ({})", demo.number(), demo.title());
                show_demo(out, demo, rng, config)?;
                if !wait_for_continue(input, out)? {
                    log::info!("input closed at continue prompt");
                    break;
                }
            }
        }
    }

    execute!(
        out,
        SetForegroundColor(Color::Cyan),
        Print("Goodbye!\n"),
        ResetColor
    )
}

fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        Print("\n"),
        SetForegroundColor(Color::Cyan),
        Print("tensor-lab :: array arithmetic, narrated\n"),
        ResetColor
    )?;
    for demo in Demo::ALL {
        execute!(out, Print(format!("  {}) {}\n", demo.number(), demo.title())))?;
    }
    execute!(
        out,
        Print("  0) Exit\n"),
        SetForegroundColor(Color::DarkGrey),
        Print("Enter your choice: "),
        ResetColor
    )
}

fn show_demo<W: Write>(
    out: &mut W,
    demo: Demo,
    rng: &mut LabRng,
    config: &LabConfig,
) -> io::Result<()> {
    execute!(
        out,
        Print("\n"),
        SetForegroundColor(Color::Magenta),
        Print(banner(demo.title())),
        ResetColor
    )?;
    match demo.render(rng, config) {
        Ok(text) => execute!(out, Print(text), Print("\n")),
        Err(e) => {
            log::warn!("demo {} failed: {e}", demo.number());
            execute!(
                out,
                SetForegroundColor(Color::Red),
                Print(format!("Demo failed: {e}\n")),
                ResetColor
            )
        }
    }
}

/// Block until a line arrives. `false` when the input is exhausted.
fn wait_for_continue<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    execute!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print("\nPress Enter to continue..."),
        ResetColor
    )?;
    Ok(read_line(input)?.is_some())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
