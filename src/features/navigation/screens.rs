//! Top-level screen sequence and swipe targets.

use crate::features::navigation::gesture::SwipeDirection;

/// Swipeable top-level screens, in strip order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Lembretes,
    Agenda,
    Compras,
    Filhos,
    Rede,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Lembretes => "Lembretes",
            Screen::Agenda => "Agenda",
            Screen::Compras => "Lista de compras",
            Screen::Filhos => "Filhos",
            Screen::Rede => "Rede de apoio",
        }
    }

    /// Route path used by the host shell
    pub fn route(&self) -> &'static str {
        match self {
            Screen::Lembretes => "/lembretes",
            Screen::Agenda => "/agenda",
            Screen::Compras => "/compras",
            Screen::Filhos => "/filhos",
            Screen::Rede => "/rede",
        }
    }

    pub fn all() -> &'static [Screen] {
        &[
            Screen::Lembretes,
            Screen::Agenda,
            Screen::Compras,
            Screen::Filhos,
            Screen::Rede,
        ]
    }

    /// Position in the swipe order
    pub fn position(&self) -> usize {
        Screen::all()
            .iter()
            .position(|screen| screen == self)
            .unwrap_or(0)
    }

    /// Next screen in the swipe order, `None` at the end
    pub fn next(&self) -> Option<Screen> {
        Screen::all().get(self.position() + 1).copied()
    }

    /// Previous screen in the swipe order, `None` at the start
    pub fn previous(&self) -> Option<Screen> {
        self.position()
            .checked_sub(1)
            .and_then(|index| Screen::all().get(index))
            .copied()
    }
}

/// Resolve a qualifying swipe into a navigation target.
///
/// Leftward swipes advance, rightward swipes retreat; at either end of the
/// sequence the swipe is absorbed as a no-op.
pub fn swipe_target(current: Screen, direction: SwipeDirection) -> Option<Screen> {
    match direction {
        SwipeDirection::Left => current.next(),
        SwipeDirection::Right => current.previous(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_order_is_stable() {
        let all = Screen::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], Screen::Lembretes);
        assert_eq!(all[4], Screen::Rede);
        for (index, screen) in all.iter().enumerate() {
            assert_eq!(screen.position(), index);
        }
    }

    #[test]
    fn test_left_swipe_advances_from_middle() {
        assert_eq!(
            swipe_target(Screen::Compras, SwipeDirection::Left),
            Some(Screen::Filhos)
        );
    }

    #[test]
    fn test_right_swipe_retreats_from_middle() {
        assert_eq!(
            swipe_target(Screen::Compras, SwipeDirection::Right),
            Some(Screen::Agenda)
        );
    }

    #[test]
    fn test_right_swipe_at_first_screen_is_noop() {
        assert_eq!(swipe_target(Screen::Lembretes, SwipeDirection::Right), None);
    }

    #[test]
    fn test_left_swipe_at_last_screen_is_noop() {
        assert_eq!(swipe_target(Screen::Rede, SwipeDirection::Left), None);
    }

    #[test]
    fn test_titles_and_routes() {
        assert_eq!(Screen::Compras.title(), "Lista de compras");
        assert_eq!(Screen::Rede.route(), "/rede");
    }
}
