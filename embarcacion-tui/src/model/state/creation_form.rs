//! 创建表单状态
//!
//! ```text
//!   Editing ──submit(有效)──▶ Submitting ──成功──▶ Editing（空草稿，表单关闭）
//!      ▲  │                        │
//!      │  └─submit(无效)─▶ 显示字段错误
//!      └──────────失败─────────────┘（草稿保留）
//! ```

use chrono::NaiveDate;
use embarcacion_core::types::{NewVessel, RecordSchema, Vessel, VesselDraft, VesselField, today};
use embarcacion_core::validation::{ValidationReport, build_new_vessel};

/// 表单阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// 创建表单
#[derive(Debug, Clone)]
pub struct CreationForm {
    pub schema: RecordSchema,
    pub draft: VesselDraft,
    pub errors: ValidationReport,
    pub focus: VesselField,
    pub phase: FormPhase,
}

impl CreationForm {
    pub fn new(schema: RecordSchema) -> Self {
        Self::with_today(schema, today())
    }

    /// 指定“今天”，便于测试
    pub fn with_today(schema: RecordSchema, today: NaiveDate) -> Self {
        Self {
            schema,
            draft: VesselDraft::empty(schema, today),
            errors: ValidationReport::default(),
            focus: VesselField::Name,
            phase: FormPhase::Editing,
        }
    }

    /// 重置为空草稿
    pub fn reset(&mut self) {
        *self = Self::new(self.schema);
    }

    /// 打开表单时的初始数据：已有记录或空草稿
    pub fn seed(&mut self, initial: Option<&Vessel>) {
        self.reset();
        if let Some(vessel) = initial {
            self.draft = VesselDraft::from_vessel(vessel, self.schema, today());
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// 输入字符；只清除当前字段的错误
    pub fn input(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        self.draft.get_mut(self.focus).push(c);
        self.errors.clear(self.focus);
    }

    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.draft.get_mut(self.focus).pop();
        self.errors.clear(self.focus);
    }

    pub fn next_field(&mut self) {
        let fields = self.schema.fields();
        let index = Self::position(fields, self.focus);
        self.focus = fields[(index + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = self.schema.fields();
        let index = Self::position(fields, self.focus);
        self.focus = fields[(index + fields.len() - 1) % fields.len()];
    }

    fn position(fields: &[VesselField], field: VesselField) -> usize {
        fields.iter().position(|f| *f == field).unwrap_or(0)
    }

    /// 提交：完整校验，有效时进入 Submitting 并返回请求体
    pub fn submit(&mut self) -> Option<NewVessel> {
        if self.is_submitting() {
            return None;
        }
        match build_new_vessel(&self.draft, self.schema) {
            Ok(body) => {
                self.errors = ValidationReport::default();
                self.phase = FormPhase::Submitting;
                Some(body)
            }
            Err(report) => {
                tracing::debug!("Form rejected: {report}");
                self.errors = report;
                None
            }
        }
    }

    /// 创建成功：草稿重置
    pub fn on_create_succeeded(&mut self) {
        self.reset();
    }

    /// 创建失败：回到编辑，字段保留
    pub fn on_create_failed(&mut self) {
        self.phase = FormPhase::Editing;
    }
}
