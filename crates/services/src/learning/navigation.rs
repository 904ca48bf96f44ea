/// Host capability for leaving the learning view.
///
/// Any `FnMut()` closure qualifies, so a host usually passes its router's
/// back action directly.
pub trait NavigateBack {
    fn navigate_back(&mut self);
}

impl<F: FnMut()> NavigateBack for F {
    fn navigate_back(&mut self) {
        self();
    }
}
