pub mod assembler;
pub mod hour_pillar;
pub mod symbols;
pub mod ten_gods;

pub use crate::domain::model::{ConvertRequest, DayFortune, SajuData};
pub use crate::domain::ports::{ConfigProvider, FortuneOracle};
pub use crate::utils::error::Result;
