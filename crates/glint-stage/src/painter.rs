//! Drawing seam for the particle field.
//!
//! The field paints through the `Painter` trait so the same simulation can
//! drive a real canvas backend or the recording painter used by tests and
//! headless runs. The recorder keeps a flat command list, one entry per
//! primitive, in emission order.

/// A recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Clear the whole surface.
    Clear,
    /// Set the global paint transparency for subsequent primitives.
    SetAlpha(f32),
    FillCircle { x: f64, y: f64, radius: f64 },
    StrokeLine { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// Abstract drawing surface.
pub trait Painter {
    fn clear(&mut self);
    fn set_alpha(&mut self, alpha: f32);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

/// Painter that records commands into a display list.
#[derive(Debug, Default)]
pub struct DisplayListPainter {
    commands: Vec<PaintCommand>,
}

impl DisplayListPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty for the next
    /// frame.
    pub fn take(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Painter for DisplayListPainter {
    fn clear(&mut self) {
        self.commands.push(PaintCommand::Clear);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(PaintCommand::SetAlpha(alpha));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.commands.push(PaintCommand::FillCircle { x, y, radius });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(PaintCommand::StrokeLine { x1, y1, x2, y2 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_emission_order() {
        let mut painter = DisplayListPainter::new();
        painter.clear();
        painter.set_alpha(0.3);
        painter.fill_circle(1.0, 2.0, 3.0);
        painter.stroke_line(0.0, 0.0, 10.0, 10.0);

        assert_eq!(
            painter.commands(),
            &[
                PaintCommand::Clear,
                PaintCommand::SetAlpha(0.3),
                PaintCommand::FillCircle {
                    x: 1.0,
                    y: 2.0,
                    radius: 3.0
                },
                PaintCommand::StrokeLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 10.0,
                    y2: 10.0
                },
            ]
        );
    }

    #[test]
    fn test_take_resets_list() {
        let mut painter = DisplayListPainter::new();
        painter.clear();
        let taken = painter.take();
        assert_eq!(taken.len(), 1);
        assert!(painter.commands().is_empty());
    }
}
