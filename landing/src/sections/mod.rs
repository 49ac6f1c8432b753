// ЛесПром landing page sections, in document order

mod about;
mod advantages;
mod blog;
mod calculator;
mod catalog;
mod contacts;
mod footer;
mod hero;
mod nav;
mod services;

pub use about::About;
pub use advantages::Advantages;
pub use blog::Blog;
pub use calculator::CalculatorSection;
pub use catalog::CatalogSection;
pub use contacts::Contacts;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use services::Services;
