/// Grounded movement flags, written by the input layer each frame and read
/// by the simulation tick. Fire/power/reset are edge-triggered operations
/// on the simulation itself, not flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementInput {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
