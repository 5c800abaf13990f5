//! Recording fakes for the panel hardware.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::*;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use xva1::parameters::{SynthRegisters, ValueLabel};

use crate::hal::{LedButton, Multiplexer, SmallDisplay, StatusDisplay, TextBounds};
use crate::layout::{FrontPanel, PanelConfig};

/// Value label from a literal.
pub(crate) fn label(text: &str) -> ValueLabel {
    let mut label = ValueLabel::new();
    label.push_str(text).unwrap();
    label
}

// ── I2C ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct I2cState {
    writes: Vec<(u8, Vec<u8>)>,
    fail_writes: bool,
}

/// I2C bus that records writes; clones share the same record.
#[derive(Clone, Default)]
pub(crate) struct FakeI2c {
    state: Rc<RefCell<I2cState>>,
}

impl FakeI2c {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every `(address, bytes)` written so far.
    pub(crate) fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.state.borrow().writes.clone()
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl ErrorType for FakeI2c {
    type Error = ErrorKind;
}

impl I2c for FakeI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        let has_write = operations.iter().any(|op| matches!(op, Operation::Write(_)));
        if state.fail_writes && has_write {
            return Err(ErrorKind::Other);
        }

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => state.writes.push((address, bytes.to_vec())),
                Operation::Read(buffer) => buffer.fill(0),
            }
        }
        Ok(())
    }
}

// ── Colour canvas ────────────────────────────────────────────────────────

/// 320×240 colour draw target remembering every pixel.
pub(crate) struct Canvas {
    pub cleared: Option<Rgb565>,
    pub pixels: Vec<(Point, Rgb565)>,
}

impl Canvas {
    pub(crate) fn new() -> Self {
        Self {
            cleared: None,
            pixels: Vec::new(),
        }
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.pixels.push((point, color));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.cleared = Some(color);
        self.pixels.clear();
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(320, 240)
    }
}

// ── Synth ────────────────────────────────────────────────────────────────

/// Register file with a write log.
pub(crate) struct FakeSynth {
    pub registers: Vec<u8>,
    pub writes: Vec<(u16, u8)>,
}

impl FakeSynth {
    pub(crate) fn new() -> Self {
        Self {
            registers: vec![0; 512],
            writes: Vec::new(),
        }
    }

    pub(crate) fn with_values(values: &[(u16, u8)]) -> Self {
        let mut synth = Self::new();
        for &(register, value) in values {
            synth.registers[usize::from(register)] = value;
        }
        synth
    }

    pub(crate) fn value(&self, register: u16) -> u8 {
        self.registers[usize::from(register)]
    }
}

impl SynthRegisters for FakeSynth {
    fn get_parameter(&mut self, register: u16) -> u8 {
        self.registers[usize::from(register)]
    }

    fn set_parameter(&mut self, register: u16, value: u8) {
        self.registers[usize::from(register)] = value;
        self.writes.push((register, value));
    }
}

// ── Buttons ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct FakeLed {
    pub on: bool,
}

impl LedButton for FakeLed {
    fn set_led(&mut self, on: bool) {
        self.on = on;
    }
}

// ── Displays and multiplexer ─────────────────────────────────────────────

/// Draw call seen by one of the panel fakes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PanelEvent {
    Select(usize),
    Clear,
    Cursor(i32, i32),
    Print(String),
    Rule { from: Point, to: Point },
    Present,
    StatusFill(Rgb565),
    StatusPrintln(String),
    StatusText {
        text: String,
        x: i32,
        y: i32,
        color: Rgb565,
    },
}

/// One redraw of a small display, from `Clear` to `Present`.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    pub channel: usize,
    pub prints: Vec<String>,
    pub rule: bool,
    pub presented: bool,
}

/// Event log shared by the fake multiplexer and displays.
#[derive(Clone, Default)]
pub(crate) struct PanelLog(Rc<RefCell<Vec<PanelEvent>>>);

impl PanelLog {
    fn push(&self, event: PanelEvent) {
        self.0.borrow_mut().push(event);
    }

    pub(crate) fn events(&self) -> Vec<PanelEvent> {
        self.0.borrow().clone()
    }

    /// Forget everything recorded so far.
    pub(crate) fn reset(&self) {
        self.0.borrow_mut().clear();
    }

    /// Small display redraws, tagged with the channel selected at the time.
    pub(crate) fn frames(&self) -> Vec<Frame> {
        let mut channel = usize::MAX;
        let mut frames: Vec<Frame> = Vec::new();

        for event in self.0.borrow().iter() {
            match event {
                PanelEvent::Select(selected) => channel = *selected,
                PanelEvent::Clear => frames.push(Frame {
                    channel,
                    ..Frame::default()
                }),
                PanelEvent::Print(text) => {
                    if let Some(frame) = frames.last_mut() {
                        frame.prints.push(text.clone());
                    }
                }
                PanelEvent::Rule { .. } => {
                    if let Some(frame) = frames.last_mut() {
                        frame.rule = true;
                    }
                }
                PanelEvent::Present => {
                    if let Some(frame) = frames.last_mut() {
                        frame.presented = true;
                    }
                }
                _ => {}
            }
        }
        frames
    }

    /// Texts drawn on the status display with `draw_string`.
    pub(crate) fn status_texts(&self) -> Vec<(String, i32, i32, Rgb565)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PanelEvent::StatusText { text, x, y, color } => Some((text.clone(), *x, *y, *color)),
                _ => None,
            })
            .collect()
    }
}

pub(crate) struct FakeMux {
    log: PanelLog,
}

impl Multiplexer for FakeMux {
    fn select_channel(&mut self, channel: usize) {
        self.log.push(PanelEvent::Select(channel));
    }
}

/// Small display with a 6×8 px font per scale step and a 128 px width.
pub(crate) struct FakeOled {
    log: PanelLog,
    text_size: u8,
}

impl SmallDisplay for FakeOled {
    fn clear_display(&mut self) {
        self.log.push(PanelEvent::Clear);
    }

    fn set_text_size(&mut self, scale: u8) {
        self.text_size = scale;
    }

    fn set_text_color(&mut self, _color: BinaryColor) {}

    fn measure_text(&self, text: &str) -> TextBounds {
        let scale = u32::from(self.text_size.max(1));
        TextBounds {
            x: 0,
            y: 0,
            width: text.chars().count() as u32 * 6 * scale,
            height: 8 * scale,
        }
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.log.push(PanelEvent::Cursor(x, y));
    }

    fn print(&mut self, text: &str) {
        self.log.push(PanelEvent::Print(text.to_string()));
    }

    fn draw_line(&mut self, start: Point, end: Point, _color: BinaryColor) {
        self.log.push(PanelEvent::Rule { from: start, to: end });
    }

    fn present(&mut self) {
        self.log.push(PanelEvent::Present);
    }

    fn width(&self) -> u32 {
        128
    }
}

pub(crate) struct FakeStatus {
    log: PanelLog,
    foreground: Rgb565,
}

impl StatusDisplay for FakeStatus {
    fn fill_screen(&mut self, color: Rgb565) {
        self.log.push(PanelEvent::StatusFill(color));
    }

    fn set_cursor(&mut self, _x: i32, _y: i32, _font: u8) {}

    fn set_text_color(&mut self, foreground: Rgb565, _background: Rgb565) {
        self.foreground = foreground;
    }

    fn set_text_size(&mut self, _scale: u8) {}

    fn println(&mut self, text: &str) {
        self.log.push(PanelEvent::StatusPrintln(text.to_string()));
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32, _font: u8) {
        self.log.push(PanelEvent::StatusText {
            text: text.to_string(),
            x,
            y,
            color: self.foreground,
        });
    }
}

pub(crate) type FakePanel = FrontPanel<FakeMux, FakeOled, FakeStatus>;

/// Panel with default config whose fakes all record into the returned log.
pub(crate) fn panel() -> (FakePanel, PanelLog) {
    let log = PanelLog::default();
    let panel = FrontPanel::new(
        FakeMux { log: log.clone() },
        FakeOled {
            log: log.clone(),
            text_size: 1,
        },
        FakeStatus {
            log: log.clone(),
            foreground: Rgb565::WHITE,
        },
        PanelConfig::default(),
    );
    (panel, log)
}
