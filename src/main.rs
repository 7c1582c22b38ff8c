use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{poll, read, Event, KeyCode};

use vip8::display::{Display, MonoTermDisplay, NullDisplay};
use vip8::interpreter::Interpreter;
use vip8::sound::{Beeper, Mute, Sound};

/// frame period: one cpu cycle, both timer ticks, render and audio poll
const FRAME_DELAY: Duration = Duration::from_millis(15);

#[derive(Parser)]
#[command(about = "CHIP-8 virtual machine")]
struct Args {
    /// ROM image to run (raw opcode/data bytes, loaded at 0x200)
    rom: PathBuf,

    /// run without audio
    #[arg(long)]
    mute: bool,

    /// run without rendering (useful with RUST_LOG=debug to trace a rom)
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut interpreter = Interpreter::new();
    let mut rom = File::open(&args.rom)?;
    interpreter.load_rom(&mut rom)?;
    interpreter.reset();

    let mut display: Box<dyn Display> = if args.headless {
        Box::new(NullDisplay::new())
    } else {
        Box::new(MonoTermDisplay::new()?)
    };
    let mut sound: Box<dyn Sound> = if args.mute {
        Box::new(Mute::new())
    } else {
        Box::new(Beeper::new())
    };

    loop {
        if let Err(e) = interpreter.tick() {
            log::error!("halting: {}", e);
            return Err(e.into());
        }
        interpreter.tick_timers();

        display.render(interpreter.framebuffer())?;
        sound.update(interpreter.sound_playing())?;

        if quit_requested()? {
            break;
        }
        spin_sleep::sleep(FRAME_DELAY);
    }

    Ok(())
}

/// drain pending terminal events; Esc or q ends the run
fn quit_requested() -> Result<bool, io::Error> {
    let mut quit = false;
    while poll(Duration::from_millis(0))? {
        if let Event::Key(key) = read()? {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => quit = true,
                _ => {}
            }
        }
    }
    Ok(quit)
}
