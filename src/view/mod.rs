//! Rendering pipeline: view models, surface trees, the list renderer and serializers.

pub mod dom;
pub mod html;
pub mod model;
pub mod page;
pub mod render;
pub mod text;

pub use dom::{DomNode, Element, Surface};
pub use model::{CardView, EmptyState, cards};
pub use page::Page;
pub use render::{SectionView, render, render_sections, render_text};
