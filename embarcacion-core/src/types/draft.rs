use chrono::NaiveDate;

use super::{RecordSchema, Vessel, VesselField};
use crate::validation::{DATE_FORMAT, format_number};

/// 当前本地日期
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// 表单草稿：所有字段均为原始文本，提交时才校验与转换
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VesselDraft {
    pub name: String,
    pub capacity: String,
    pub description: String,
    /// `YYYY-MM-DD`，仅 `V2` 使用
    pub scheduled_date: String,
}

impl VesselDraft {
    /// 空草稿；`V2` 的日期默认为 `today`
    #[must_use]
    pub fn empty(schema: RecordSchema, today: NaiveDate) -> Self {
        Self {
            scheduled_date: if schema.has_scheduled_date() {
                today.format(DATE_FORMAT).to_string()
            } else {
                String::new()
            },
            ..Self::default()
        }
    }

    /// 以已有记录填充草稿
    #[must_use]
    pub fn from_vessel(vessel: &Vessel, schema: RecordSchema, today: NaiveDate) -> Self {
        let scheduled_date = if schema.has_scheduled_date() {
            vessel
                .scheduled_date
                .unwrap_or(today)
                .format(DATE_FORMAT)
                .to_string()
        } else {
            String::new()
        };
        Self {
            name: vessel.name.clone(),
            capacity: format_number(vessel.capacity),
            description: vessel.description.clone(),
            scheduled_date,
        }
    }

    #[must_use]
    pub fn get(&self, field: VesselField) -> &str {
        match field {
            VesselField::Name => &self.name,
            VesselField::Capacity => &self.capacity,
            VesselField::Description => &self.description,
            VesselField::ScheduledDate => &self.scheduled_date,
        }
    }

    pub fn get_mut(&mut self, field: VesselField) -> &mut String {
        match field {
            VesselField::Name => &mut self.name,
            VesselField::Capacity => &mut self.capacity,
            VesselField::Description => &mut self.description,
            VesselField::ScheduledDate => &mut self.scheduled_date,
        }
    }
}
