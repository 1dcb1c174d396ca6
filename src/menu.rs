use std::fmt;

use crate::Position;

/// Where a menu is drawn. Centered menus take over the screen, anchored ones
/// start at a fixed cell and leave the rest of the screen alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAnchor {
    Center,
    At(Position),
}

/// Single-column selectable list. Navigation clamps at both ends.
#[derive(Clone, Debug)]
pub struct Menu<T> {
    items: Vec<T>,
    selected: usize,
    anchor: MenuAnchor,
}

/// What a renderer needs to draw a menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub items: Vec<String>,
    pub selected: usize,
    pub anchor: MenuAnchor,
}

impl<T> Menu<T> {
    /// # Panics
    /// If `items` is empty.
    pub fn new(items: Vec<T>, anchor: MenuAnchor) -> Self {
        assert!(!items.is_empty(), "a menu needs at least one item");
        Menu { items, selected: 0, anchor }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &T {
        &self.items[self.selected]
    }

    pub fn move_selection(&mut self, delta: isize) {
        let last = self.items.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }
}

impl<T: fmt::Display> Menu<T> {
    pub fn view(&self) -> MenuView {
        MenuView {
            items: self.items.iter().map(ToString::to_string).collect(),
            selected: self.selected,
            anchor: self.anchor,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MainMenuItem {
    Play,
    Scoreboard,
    Exit,
}

impl MainMenuItem {
    pub const ALL: [MainMenuItem; 3] = [MainMenuItem::Play, MainMenuItem::Scoreboard, MainMenuItem::Exit];
}

impl fmt::Display for MainMenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MainMenuItem::Play => "Play",
            MainMenuItem::Scoreboard => "Scoreboard",
            MainMenuItem::Exit => "Exit",
        };
        f.write_str(label)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PauseMenuItem {
    Resume,
    MainMenu,
    Exit,
}

impl PauseMenuItem {
    pub const ALL: [PauseMenuItem; 3] = [PauseMenuItem::Resume, PauseMenuItem::MainMenu, PauseMenuItem::Exit];
}

impl fmt::Display for PauseMenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PauseMenuItem::Resume => "Resume",
            PauseMenuItem::MainMenu => "Main menu",
            PauseMenuItem::Exit => "Exit",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps() {
        let mut menu = Menu::new(MainMenuItem::ALL.to_vec(), MenuAnchor::Center);
        assert_eq!(menu.selected_index(), 0);

        menu.move_selection(-1);
        assert_eq!(menu.selected_index(), 0);

        menu.move_selection(1);
        menu.move_selection(1);
        assert_eq!(menu.selected_index(), 2);
        assert_eq!(*menu.selected_item(), MainMenuItem::Exit);

        menu.move_selection(1);
        assert_eq!(menu.selected_index(), 2);
    }

    #[test]
    fn test_view_labels() {
        let anchor = MenuAnchor::At(Position::new(1, 3));
        let mut menu = Menu::new(PauseMenuItem::ALL.to_vec(), anchor);
        menu.move_selection(1);

        let view = menu.view();
        assert_eq!(view.items, vec!["Resume", "Main menu", "Exit"]);
        assert_eq!(view.selected, 1);
        assert_eq!(view.anchor, anchor);
    }

    #[test]
    #[should_panic]
    fn test_empty_menu_panics() {
        let _ = Menu::<MainMenuItem>::new(vec![], MenuAnchor::Center);
    }
}
