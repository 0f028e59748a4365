/// Input events delivered to page components through a listener registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Pointer pressed outside of the component that subscribed.
    ClickOutside,
    KeyPress { key: char, alt: bool },
}
