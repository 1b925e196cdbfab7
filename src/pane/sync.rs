use super::{Notification, PaneId, SplitPane};
use log::trace;

/// Upper bound on the hops a single move can take to settle: mirror, clamp back, confirm.
const MAX_HOPS: usize = 3;

/// What a single move or resize cost before both panes settled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Propagation {
    /// notifications handled by [`PaneSync::on_divider_moved`]
    pub hops: usize,
    /// offset writes that actually changed a pane
    pub writes: usize,
}

/// Keeps the dividers of the scrolling and the fixed split pane at the same offset.
#[derive(Clone, Copy, Debug)]
pub struct PaneSync {
    scrolling: SplitPane,
    fixed: SplitPane,
}

impl PaneSync {
    #[must_use]
    pub const fn new(offset: u32) -> Self {
        Self {
            scrolling: SplitPane::new(PaneId::Scrolling, offset),
            fixed: SplitPane::new(PaneId::Fixed, offset),
        }
    }

    #[must_use]
    pub const fn pane(&self, id: PaneId) -> &SplitPane {
        match id {
            PaneId::Scrolling => &self.scrolling,
            PaneId::Fixed => &self.fixed,
        }
    }

    fn pane_mut(&mut self, id: PaneId) -> &mut SplitPane {
        match id {
            PaneId::Scrolling => &mut self.scrolling,
            PaneId::Fixed => &mut self.fixed,
        }
    }

    /// The divider offset both panes share at rest.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.scrolling.offset()
    }

    /// Mirrors a divider change of `source` onto the other pane.
    ///
    /// Nothing is written when the other pane already shows `new_offset`. Returns the
    /// other pane's own notification if the write changed it, or if the other pane is
    /// pinned below `new_offset` by its bounds and `source` has to follow it back.
    pub fn on_divider_moved(&mut self, source: PaneId, new_offset: u32) -> Option<Notification> {
        let other = self.pane_mut(source.other());

        if other.offset() == new_offset {
            return None;
        }

        trace!(
            "mirroring {source:?} divider at {new_offset} onto {:?}",
            other.id()
        );

        other.set_offset(new_offset).or(Some(Notification {
            pane: other.id(),
            offset: other.offset(),
        }))
    }

    /// Moves the divider of `pane`, by drag or programmatically, and lets the other pane follow.
    pub fn move_divider(&mut self, pane: PaneId, offset: u32) -> Propagation {
        let notification = self.pane_mut(pane).set_offset(offset);
        self.dispatch(notification)
    }

    /// Updates the largest offset `pane` can show after its width changed.
    pub fn resize(&mut self, pane: PaneId, max: u32) -> Propagation {
        let notification = self.pane_mut(pane).set_max(max);
        self.dispatch(notification)
    }

    fn dispatch(&mut self, mut pending: Option<Notification>) -> Propagation {
        let mut propagation = Propagation {
            hops: 0,
            writes: usize::from(pending.is_some()),
        };

        while let Some(Notification { pane, offset }) = pending {
            let target = pane.other();
            let before = self.pane(target).offset();

            propagation.hops += 1;
            pending = self.on_divider_moved(pane, offset);
            propagation.writes += usize::from(self.pane(target).offset() != before);
        }

        debug_assert!(propagation.hops <= MAX_HOPS);
        debug_assert_eq!(self.scrolling.offset(), self.fixed.offset());

        propagation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_sync(sync: &PaneSync) {
        assert_eq!(
            sync.pane(PaneId::Scrolling).offset(),
            sync.pane(PaneId::Fixed).offset()
        );
    }

    #[test]
    fn drag_is_mirrored() {
        let mut sync = PaneSync::new(200);

        let propagation = sync.move_divider(PaneId::Scrolling, 260);

        assert_eq!(sync.pane(PaneId::Fixed).offset(), 260);
        assert_eq!(sync.offset(), 260);
        assert_eq!(propagation, Propagation { hops: 2, writes: 2 });
    }

    #[test]
    fn mirror_skips_equal_offsets() {
        let mut sync = PaneSync::new(150);

        assert_eq!(sync.on_divider_moved(PaneId::Scrolling, 150), None);
        assert_eq!(sync.on_divider_moved(PaneId::Fixed, 150), None);
        assert_in_sync(&sync);
    }

    #[test]
    fn setting_the_same_offset_does_nothing() {
        let mut sync = PaneSync::new(150);

        let propagation = sync.move_divider(PaneId::Fixed, 150);

        assert_eq!(propagation, Propagation::default());
        assert_eq!(sync.offset(), 150);
    }

    #[test]
    fn mirror_returns_the_other_panes_notification() {
        let mut sync = PaneSync::new(100);

        assert_eq!(
            sync.on_divider_moved(PaneId::Fixed, 120),
            Some(Notification {
                pane: PaneId::Scrolling,
                offset: 120
            })
        );
        assert_eq!(sync.pane(PaneId::Scrolling).offset(), 120);
    }

    #[test]
    fn narrower_pane_clamps_both() {
        let mut sync = PaneSync::new(0);
        sync.resize(PaneId::Scrolling, 480);
        sync.resize(PaneId::Fixed, 500);

        let propagation = sync.move_divider(PaneId::Fixed, 500);

        assert_eq!(sync.offset(), 480);
        assert_in_sync(&sync);
        assert_eq!(propagation, Propagation { hops: 3, writes: 3 });
    }

    #[test]
    fn pinned_pane_pulls_the_source_back() {
        let mut sync = PaneSync::new(480);
        sync.resize(PaneId::Scrolling, 480);
        sync.resize(PaneId::Fixed, 500);

        let propagation = sync.move_divider(PaneId::Fixed, 500);

        assert_eq!(sync.offset(), 480);
        assert_in_sync(&sync);
        assert_eq!(propagation, Propagation { hops: 3, writes: 2 });
    }

    #[test]
    fn shrinking_one_pane_pulls_both_in() {
        let mut sync = PaneSync::new(350);
        sync.resize(PaneId::Scrolling, 1000);
        sync.resize(PaneId::Fixed, 1000);

        let propagation = sync.resize(PaneId::Fixed, 300);

        assert_eq!(sync.offset(), 300);
        assert_in_sync(&sync);
        assert_eq!(propagation, Propagation { hops: 2, writes: 2 });
    }

    #[test]
    fn growing_leaves_offsets_alone() {
        let mut sync = PaneSync::new(350);
        sync.resize(PaneId::Scrolling, 600);

        assert_eq!(sync.resize(PaneId::Scrolling, 1200), Propagation::default());
        assert_eq!(sync.offset(), 350);
    }

    #[test]
    fn last_writer_wins() {
        let mut sync = PaneSync::new(200);

        sync.move_divider(PaneId::Scrolling, 240);
        sync.move_divider(PaneId::Fixed, 180);

        assert_eq!(sync.offset(), 180);
        assert_in_sync(&sync);
    }

    #[test]
    fn every_drag_settles_quickly() {
        let mut sync = PaneSync::new(350);
        sync.resize(PaneId::Scrolling, 1185);
        sync.resize(PaneId::Fixed, 1200);

        let mut offset = 7_u32;
        for i in 0..500_usize {
            offset = offset.wrapping_mul(2_654_435_761).wrapping_add(12_345) % 1500;
            let pane = if i % 3 == 0 {
                PaneId::Fixed
            } else {
                PaneId::Scrolling
            };

            let propagation = sync.move_divider(pane, offset);

            assert!(propagation.hops <= MAX_HOPS);
            assert!(sync.offset() <= 1185);
            assert_in_sync(&sync);
        }
    }
}
