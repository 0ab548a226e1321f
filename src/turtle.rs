use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    capability::{CapabilityTable, Interpreter, ParamKind},
    error::{EvaluationError, GrammarError},
    value::Value,
};

/// A straight line drawn by [`Turtle::fwd`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    /// Start point.
    pub from:      (f64, f64),
    /// End point.
    pub to:        (f64, f64),
    /// Stroke thickness.
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pose {
    position: (f64, f64),
    rotation: f64,
}

impl Pose {
    const ORIGIN: Self = Self { position: (0.0, 0.0),
                                rotation: 0.0, };
}

/// A 2D turtle that records the geometry of a plant instead of drawing it.
///
/// Heading is measured in degrees clockwise from the positive y axis, so a
/// fresh turtle moves straight up. `[` saves the current pose and `]` restores
/// the most recently saved one.
///
/// # Example
/// ```
/// use lsystem::{
///     grammar::{alphabet::Alphabet, core::LSystem},
///     turtle::Turtle,
/// };
///
/// let alphabet = Alphabet::new(&["fwd", "rot"], &[], &['[', ']']);
/// let mut system = LSystem::new(alphabet, Turtle::capabilities(), Turtle::new(0));
///
/// let tokens = system.build("fwd(2,1)[rot(90)fwd(1,1)]fwd(1,1)", &[] as &[(&str, &str)], 0).unwrap();
/// system.execute(&tokens).unwrap();
///
/// let segments = system.interpreter().segments();
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[2].from, (0.0, 2.0));
/// assert_eq!(segments[2].to, (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct Turtle {
    pose:     Pose,
    stack:    Vec<Pose>,
    segments: Vec<Segment>,
    rng:      StdRng,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }
}

impl Turtle {
    /// Creates a turtle whose random source is seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { pose: Pose::ORIGIN,
               stack: Vec::new(),
               segments: Vec::new(),
               rng }
    }

    /// The capabilities a turtle exposes to a grammar.
    ///
    /// | name        | kind     | parameters              |
    /// |-------------|----------|-------------------------|
    /// | `fwd`       | action   | `length`, `thickness`   |
    /// | `rot`       | action   | `angle` (degrees)       |
    /// | `L`         | action   | `v` (marker, no effect) |
    /// | `randrange` | function | `min`, `max`            |
    #[must_use]
    pub fn capabilities() -> CapabilityTable<Self> {
        use ParamKind::Number;

        CapabilityTable::<Self>::new().with_action("fwd", &[Number, Number], |t, args| {
                                          t.fwd(args[0].as_real()?, args[1].as_real()?);
                                          Ok(())
                                      })
                                      .with_action("rot", &[Number], |t, args| {
                                          t.rot(args[0].as_real()?);
                                          Ok(())
                                      })
                                      .with_action("L", &[Number], |_, _| Ok(()))
                                      .with_function("randrange", &[Number, Number], |t, args| {
                                          t.randrange(args[0].as_integer()?, args[1].as_integer()?)
                                      })
    }

    /// Moves forward along the heading and records the segment travelled.
    pub fn fwd(&mut self, length: f64, thickness: f64) {
        let (x, y) = self.pose.position;
        let radians = self.pose.rotation.to_radians();
        let to = (x + radians.sin() * length, y + radians.cos() * length);

        self.segments.push(Segment { from: (x, y),
                                     to,
                                     thickness });
        self.pose.position = to;
    }

    /// Turns by `angle` degrees.
    pub fn rot(&mut self, angle: f64) {
        self.pose.rotation += angle;
    }

    /// Draws an integer uniformly from `[min, max)`; an empty range yields
    /// `min`.
    ///
    /// # Errors
    /// Never fails; the signature matches a function capability.
    pub fn randrange(&mut self, min: i64, max: i64) -> Result<Value, EvaluationError> {
        if min >= max {
            return Ok(Value::Integer(min));
        }
        Ok(Value::Integer(self.rng.gen_range(min..max)))
    }

    /// Segments recorded since the last reset.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The current position.
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        self.pose.position
    }

    /// The current heading in degrees.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.pose.rotation
    }

    /// Number of saved poses.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Interpreter for Turtle {
    fn reset(&mut self) {
        self.pose = Pose::ORIGIN;
        self.stack.clear();
        self.segments.clear();
    }

    fn apply_constant(&mut self, constant: char) -> Result<(), GrammarError> {
        match constant {
            '[' => self.stack.push(self.pose),
            ']' => self.pose = self.stack.pop().ok_or(GrammarError::StackUnderflow { constant })?,
            _ => return Err(GrammarError::UnknownConstant { constant }),
        }
        Ok(())
    }
}
