#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BlendState {
    Holding,  // Showing a single backdrop
    Blending, // Fading the next backdrop in over the current one
}
