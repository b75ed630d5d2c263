/// Interface for accepting a sequence of path commands.
///
/// Stroke fonts only ever describe open polylines, so unlike general outline
/// sinks there are no curve or close commands.
pub trait Pen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f32, y: f32);
}

/// A single pen command, for pens that record what they are sent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PenCommand {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
}

impl PenCommand {
    /// Replay this command into `pen`.
    pub fn apply_to(self, pen: &mut impl Pen) {
        match self {
            PenCommand::MoveTo { x, y } => pen.move_to(x, y),
            PenCommand::LineTo { x, y } => pen.line_to(x, y),
        }
    }
}
