use anyhow::Result;

use crate::menu::MenuView;
use crate::session::SessionSnapshot;

/// Read-only description of what should be on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    MainMenu(MenuView),
    /// Finished scores, best first.
    Scores(Vec<u32>),
    Session(SessionSnapshot),
}

pub trait Renderer {
    fn draw(&mut self, screen: &Screen) -> Result<()>;

    /// Terminal size as (height, width).
    fn size(&self) -> Result<(u16, u16)>;
}
