pub mod stage0_normalize;
pub mod stage1_attribute;
pub mod stage2_segment;
pub mod stage3_render;

pub use stage0_normalize::*;
pub use stage1_attribute::*;
pub use stage2_segment::*;
pub use stage3_render::*;
