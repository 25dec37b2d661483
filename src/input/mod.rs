//! Tilt input
//!
//! The game only ever sees a synchronous signed `(x, y)` reading. Sensor
//! failures are absorbed here (see `LastKnown`) and never reach the loop.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A signed two-axis tilt reading, roughly `[-128, 127]` per axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tilt {
    pub x: i32,
    pub y: i32,
}

impl Tilt {
    pub const LEVEL: Tilt = Tilt { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Something that can be polled for tilt once per tick
pub trait TiltSource {
    /// Current reading; must return promptly
    fn poll(&mut self) -> Tilt;
}

impl<S: TiltSource + ?Sized> TiltSource for &mut S {
    fn poll(&mut self) -> Tilt {
        (**self).poll()
    }
}

impl<S: TiltSource + ?Sized> TiltSource for Box<S> {
    fn poll(&mut self) -> Tilt {
        (**self).poll()
    }
}

/// Sensor read failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TiltReadError {
    /// The bus transaction did not complete
    Bus(String),
    /// The sensor has no new sample
    NotReady,
}

impl fmt::Display for TiltReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiltReadError::Bus(msg) => write!(f, "bus error: {}", msg),
            TiltReadError::NotReady => write!(f, "sensor not ready"),
        }
    }
}

impl std::error::Error for TiltReadError {}

/// A tilt source that can fail
pub trait FallibleTiltSource {
    fn read(&mut self) -> Result<Tilt, TiltReadError>;
}

/// Raw accelerometer access: the 8-bit x and y output registers
pub trait RawAccelerometer {
    fn read_raw(&mut self) -> Result<[u8; 2], TiltReadError>;
}

/// Decode one two's-complement 8-bit axis register
#[inline]
pub fn normalize_axis(raw: u8) -> i32 {
    raw as i8 as i32
}

/// Turns raw register bytes into signed tilt
pub struct RawAxes<A> {
    sensor: A,
}

impl<A: RawAccelerometer> RawAxes<A> {
    pub fn new(sensor: A) -> Self {
        Self { sensor }
    }
}

impl<A: RawAccelerometer> FallibleTiltSource for RawAxes<A> {
    fn read(&mut self) -> Result<Tilt, TiltReadError> {
        let [x, y] = self.sensor.read_raw()?;
        Ok(Tilt::new(normalize_axis(x), normalize_axis(y)))
    }
}

/// Log-and-continue wrapper: a failed read yields the last good reading
pub struct LastKnown<S> {
    source: S,
    last: Tilt,
    failures: u64,
}

impl<S: FallibleTiltSource> LastKnown<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last: Tilt::LEVEL,
            failures: 0,
        }
    }

    /// Number of reads that failed so far
    pub fn failures(&self) -> u64 {
        self.failures
    }
}

impl<S: FallibleTiltSource> TiltSource for LastKnown<S> {
    fn poll(&mut self) -> Tilt {
        match self.source.read() {
            Ok(tilt) => self.last = tilt,
            Err(e) => {
                self.failures += 1;
                log::warn!("tilt read failed ({}), reusing {:?}", e, self.last);
            }
        }
        self.last
    }
}

/// Swaps the x and y axes (sensor mounted transposed to the display)
pub struct SwapAxes<S> {
    inner: S,
}

impl<S: TiltSource> SwapAxes<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: TiltSource> TiltSource for SwapAxes<S> {
    fn poll(&mut self) -> Tilt {
        let t = self.inner.poll();
        Tilt::new(t.y, t.x)
    }
}

/// Replays a fixed sequence, then keeps returning the final reading
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    readings: Vec<Tilt>,
    next: usize,
}

impl Scripted {
    pub fn new(readings: impl IntoIterator<Item = Tilt>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
            next: 0,
        }
    }

    /// The same reading forever
    pub fn constant(tilt: Tilt) -> Self {
        Self::new([tilt])
    }
}

impl TiltSource for Scripted {
    fn poll(&mut self) -> Tilt {
        let Some(last) = self.readings.len().checked_sub(1) else {
            return Tilt::LEVEL;
        };
        let tilt = self.readings[self.next.min(last)];
        self.next = self.next.saturating_add(1);
        tilt
    }
}

/// Demo input: a tilt vector of fixed magnitude slowly rotating
#[derive(Debug, Clone)]
pub struct Sweep {
    amplitude: f32,
    step: f32,
    angle: f32,
}

impl Sweep {
    /// `step` is the rotation per poll in radians
    pub fn new(amplitude: f32, step: f32) -> Self {
        Self {
            amplitude,
            step,
            angle: 0.0,
        }
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new(40.0, 0.004)
    }
}

impl TiltSource for Sweep {
    fn poll(&mut self) -> Tilt {
        let tilt = Tilt::new(
            (self.angle.cos() * self.amplitude).round() as i32,
            (self.angle.sin() * self.amplitude).round() as i32,
        );
        self.angle = (self.angle + self.step) % std::f32::consts::TAU;
        tilt
    }
}
