pub mod stage1_note;
pub mod stage2_trend;
pub mod stage3_labs;
pub mod stage4_conventional;
pub mod stage5_bundle;
