/// Which of the two stacked split panes a value belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PaneId {
    /// the split inside the scrollable, holding the track panel
    Scrolling,
    /// the split above it, holding the zoom controls
    Fixed,
}

impl PaneId {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Scrolling => Self::Fixed,
            Self::Fixed => Self::Scrolling,
        }
    }
}

/// Emitted by a [`SplitPane`] whenever its divider offset actually changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Notification {
    pub pane: PaneId,
    pub offset: u32,
}

/// A horizontally divided container, reduced to its divider position.
#[derive(Clone, Copy, Debug)]
pub struct SplitPane {
    id: PaneId,
    /// pixels from the leading edge to the divider
    offset: u32,
    /// the largest offset the pane can currently show
    ///
    /// `None` until the pane has been laid out once
    max: Option<u32>,
}

impl SplitPane {
    #[must_use]
    pub const fn new(id: PaneId, offset: u32) -> Self {
        Self {
            id,
            offset,
            max: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PaneId {
        self.id
    }

    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Moves the divider, clamped to the pane's bounds.
    ///
    /// Writing the value the pane already holds is a no-op and emits nothing.
    pub fn set_offset(&mut self, offset: u32) -> Option<Notification> {
        let offset = self.max.map_or(offset, |max| offset.min(max));

        if offset == self.offset {
            return None;
        }

        self.offset = offset;

        Some(Notification {
            pane: self.id,
            offset,
        })
    }

    /// Records a new maximum divider position and pulls the divider inside it.
    pub fn set_max(&mut self, max: u32) -> Option<Notification> {
        self.max = Some(max);
        self.set_offset(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_an_involution() {
        assert_eq!(PaneId::Scrolling.other(), PaneId::Fixed);
        assert_eq!(PaneId::Fixed.other(), PaneId::Scrolling);
        assert_eq!(PaneId::Fixed.other().other(), PaneId::Fixed);
    }

    #[test]
    fn writing_the_current_offset_is_silent() {
        let mut pane = SplitPane::new(PaneId::Fixed, 150);

        assert_eq!(pane.set_offset(150), None);
        assert_eq!(pane.offset(), 150);
    }

    #[test]
    fn changing_the_offset_notifies() {
        let mut pane = SplitPane::new(PaneId::Scrolling, 200);

        assert_eq!(
            pane.set_offset(260),
            Some(Notification {
                pane: PaneId::Scrolling,
                offset: 260
            })
        );
        assert_eq!(pane.offset(), 260);
    }

    #[test]
    fn unbounded_until_laid_out() {
        let mut pane = SplitPane::new(PaneId::Fixed, 0);

        pane.set_offset(10_000);
        assert_eq!(pane.offset(), 10_000);
    }

    #[test]
    fn offsets_are_clamped_to_max() {
        let mut pane = SplitPane::new(PaneId::Fixed, 0);
        pane.set_max(480);

        assert_eq!(
            pane.set_offset(500),
            Some(Notification {
                pane: PaneId::Fixed,
                offset: 480
            })
        );
        assert_eq!(pane.set_offset(900), None);
        assert_eq!(pane.offset(), 480);
    }

    #[test]
    fn shrinking_pulls_the_divider_in() {
        let mut pane = SplitPane::new(PaneId::Scrolling, 350);

        assert_eq!(pane.set_max(1000), None);
        assert_eq!(
            pane.set_max(300),
            Some(Notification {
                pane: PaneId::Scrolling,
                offset: 300
            })
        );
        assert_eq!(pane.offset(), 300);
    }

    #[test]
    fn growing_keeps_the_divider() {
        let mut pane = SplitPane::new(PaneId::Scrolling, 300);
        pane.set_max(300);

        assert_eq!(pane.set_max(800), None);
        assert_eq!(pane.offset(), 300);
    }
}
