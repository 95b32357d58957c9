pub mod banner;
pub mod panel;
pub mod popup;
pub mod task_card;

pub use banner::{Banner, BannerVariant};
pub use panel::QuadrantPanel;
pub use popup::{centered_rect, render_input_popup, render_popup_with_block};
pub use task_card::{render_task_card, score_bar, TaskCardConfig, CARD_HEIGHT};
