use log::warn;

use crate::matrix::Transform;

/// Stack of composite transforms. The bottom frame is the world frame and is
/// never removed; the top is the frame applied to newly generated geometry.
pub struct CoordinateStack {
    stack: Vec<Transform>,
}

impl CoordinateStack {
    pub fn new() -> Self {
        Self { stack: vec![Transform::identity()] }
    }

    /// Duplicates the current top.
    pub fn push(&mut self) {
        self.stack.push(self.peek());
    }

    /// Removes the top; popping the base frame is a logged no-op.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            warn!("pop on the base coordinate system was ignored");
        }
    }

    /// Composes `transform` into the top so it applies to local geometry
    /// before the accumulated global transform: top = top x transform.
    pub fn modify_top(&mut self, transform: Transform) {
        let top = self.peek();
        *self.stack.last_mut().unwrap() = top.compose(&transform);
    }

    pub fn peek(&self) -> Transform {
        // the base frame is permanent, so the stack is never empty
        *self.stack.last().unwrap()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for CoordinateStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Axis;

    #[test]
    fn starts_at_the_identity_world_frame() {
        let stack = CoordinateStack::new();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.peek(), Transform::identity());
    }

    #[test]
    fn push_duplicates_and_pop_restores_the_top() {
        let mut stack = CoordinateStack::new();
        stack.modify_top(Transform::translation(1.0, 2.0, 3.0));
        let before = stack.peek();

        stack.push();
        assert_eq!(stack.peek(), before);

        stack.modify_top(Transform::dilation(2.0, 2.0, 2.0));
        stack.modify_top(Transform::rotation(Axis::Y, 45.0));
        assert_ne!(stack.peek(), before);

        stack.pop();
        assert_eq!(stack.peek(), before);
    }

    #[test]
    fn modify_top_is_the_direct_matrix_product() {
        let mut stack = CoordinateStack::new();
        stack.modify_top(Transform::translation(5.0, 0.0, 0.0));

        let top = stack.peek();
        let rotation = Transform::rotation(Axis::Z, 30.0);
        stack.modify_top(rotation);

        assert_eq!(stack.peek(), top.compose(&rotation));
    }

    #[test]
    fn popping_the_base_frame_is_a_no_op() {
        let mut stack = CoordinateStack::new();
        stack.modify_top(Transform::dilation(3.0, 3.0, 3.0));
        let base = stack.peek();

        stack.pop();
        stack.pop();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.peek(), base);
    }
}
