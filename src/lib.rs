//! # vip8
//!
//! A CHIP-8 virtual machine. The core is the instruction-cycle engine in
//! [`interpreter`]: one `tick()` fetches, decodes and executes exactly one
//! instruction against the register file, memory, call stack, timers and
//! framebuffer it owns. The host loop drives it and hands the results to
//! narrow collaborators:
//!
//! * [`display`] reads the framebuffer once per frame and renders it
//! * [`sound`] is told each frame whether the sound timer is running
//! * the binary owns pacing and quit handling
//!
//! All failures are fatal programming/data errors ([`error::VmError`]):
//! out-of-range access, a value too wide for a memory cell, an unknown
//! opcode (carrying the raw word), or the deliberately unimplemented
//! skip-on-key group. Nothing is retried and nothing is silently ignored.

pub mod display;
pub mod error;
pub mod framebuffer;
pub mod instruction;
pub mod interpreter;
pub mod memory;
pub mod register;
pub mod sound;
pub mod timer;
