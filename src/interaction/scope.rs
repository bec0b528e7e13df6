use std::cell::RefCell;
use std::rc::Rc;

use super::InteractionController;

pub type SharedController = Rc<RefCell<InteractionController>>;

/// Ties host subscriptions to one mounted controller.
///
/// `G` holds whatever the host registered for this page view (event
/// listeners, the welcome timer). Dropping the scope releases `G` first and
/// then tears the controller down, so no listener or timer can reach it
/// afterwards.
pub struct MountScope<G> {
    controller: SharedController,
    guards: Option<G>,
}

impl<G> MountScope<G> {
    pub fn new(controller: SharedController, guards: G) -> Self {
        Self {
            controller,
            guards: Some(guards),
        }
    }
}

impl<G> Drop for MountScope<G> {
    fn drop(&mut self) {
        drop(self.guards.take());
        self.controller.borrow_mut().teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InteractionConfig;
    use crate::interaction::{SectionExtent, SectionId, Update};
    use std::cell::Cell;

    /// Stands in for a registered listener; records when it is released
    /// and whether the controller was still live at that moment.
    struct Subscription {
        released: Rc<Cell<bool>>,
        controller: SharedController,
        mounted_at_release: Rc<Cell<Option<bool>>>,
    }

    impl Drop for Subscription {
        fn drop(&mut self) {
            self.released.set(true);
            self.mounted_at_release
                .set(Some(self.controller.borrow().is_mounted()));
        }
    }

    fn shared() -> SharedController {
        let sections = vec![SectionId::from("home"), SectionId::from("about")];
        Rc::new(RefCell::new(InteractionController::mount(
            &InteractionConfig::default(),
            sections,
            0,
        )))
    }

    fn subscribe(controller: &SharedController) -> (Subscription, Rc<Cell<bool>>, Rc<Cell<Option<bool>>>) {
        let released = Rc::new(Cell::new(false));
        let mounted_at_release = Rc::new(Cell::new(None));
        let subscription = Subscription {
            released: released.clone(),
            controller: controller.clone(),
            mounted_at_release: mounted_at_release.clone(),
        };
        (subscription, released, mounted_at_release)
    }

    #[test]
    fn dropping_scope_releases_subscriptions_then_tears_down() {
        let controller = shared();
        let (subscription, released, mounted_at_release) = subscribe(&controller);

        let scope = MountScope::new(controller.clone(), subscription);
        assert!(!released.get());
        assert!(controller.borrow().is_mounted());

        drop(scope);

        assert!(released.get());
        assert_eq!(mounted_at_release.get(), Some(true));
        assert!(!controller.borrow().is_mounted());
    }

    #[test]
    fn signals_after_unmount_change_nothing() {
        let controller = shared();
        let (subscription, _, _) = subscribe(&controller);
        drop(MountScope::new(controller.clone(), subscription));
        let before = controller.borrow().view();

        let mut state = controller.borrow_mut();
        assert_eq!(
            state.on_scroll(750.0, |_| Some(SectionExtent::new(800.0, 800.0))),
            Update::NONE
        );
        assert_eq!(state.on_pointer_move(400, 400).torch, None);
        assert_eq!(state.welcome_elapsed(), Update::NONE);
        assert_eq!(state.view(), before);
        assert!(state.view().welcome_visible);
    }

    #[test]
    fn remount_leaves_old_subscriptions_released() {
        let first = shared();
        let (old, old_released, _) = subscribe(&first);
        drop(MountScope::new(first.clone(), old));

        let second = shared();
        let (new, new_released, _) = subscribe(&second);
        let scope = MountScope::new(second.clone(), new);

        assert!(old_released.get());
        assert!(!new_released.get());
        assert!(!first.borrow().is_mounted());
        assert!(second.borrow().is_mounted());
        assert_eq!(second.borrow_mut().toggle_theme(), Update::REDRAW);

        drop(scope);
        assert!(new_released.get());
    }
}
