use crate::domain::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect { from: String, to: Route },
}
