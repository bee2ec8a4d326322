//! 行内编辑表格状态
//!
//! ```text
//! 行：     Viewing ──start_edit──▶ Editing ──commit──▶ Submitting ──成功──▶ Viewing
//!                                     │                    └──失败──▶ Editing（草稿保留）
//!                                     └──cancel──▶ Viewing
//!
//! 删除：   Idle ──request──▶ ConfirmPending ──confirm──▶ Deleting ──成功──▶ Idle
//!                                 │                          └──失败──▶ ConfirmPending
//!                                 └──cancel──▶ Idle（不发请求）
//! ```
//!
//! 两个子状态互相独立：可以在 A 行编辑时确认删除 B 行，反之亦然。
//! 各自同一时间最多一行；按键按选中行所处的子状态路由。

use embarcacion_core::types::{RecordSchema, Vessel, VesselField};
use embarcacion_core::validation::{DATE_FORMAT, coerce_number, format_number, parse_date};

/// 正在编辑的行
#[derive(Debug, Clone, PartialEq)]
pub struct RowEdit {
    pub id: i64,
    /// 行快照；按键只修改这里
    pub draft: Vessel,
    pub field: VesselField,
    /// 容量输入框显示的文本，值已同步写入 `draft.capacity`
    pub capacity_text: String,
    /// 日期输入框文本，提交时解析
    pub date_text: String,
    pub submitting: bool,
}

impl RowEdit {
    fn snapshot(vessel: &Vessel) -> Self {
        Self {
            id: vessel.id,
            draft: vessel.clone(),
            field: VesselField::Name,
            capacity_text: format_number(vessel.capacity),
            date_text: vessel
                .scheduled_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            submitting: false,
        }
    }

    /// 输入框当前显示的文本
    pub fn text(&self, field: VesselField) -> &str {
        match field {
            VesselField::Name => &self.draft.name,
            VesselField::Capacity => &self.capacity_text,
            VesselField::Description => &self.draft.description,
            VesselField::ScheduledDate => &self.date_text,
        }
    }

    fn input(&mut self, c: char) {
        match self.field {
            VesselField::Name => self.draft.name.push(c),
            VesselField::Description => self.draft.description.push(c),
            VesselField::ScheduledDate => self.date_text.push(c),
            VesselField::Capacity => {
                let candidate = if self.capacity_text == "0" && c.is_ascii_digit() {
                    c.to_string()
                } else {
                    format!("{}{c}", self.capacity_text)
                };
                self.set_capacity(candidate);
            }
        }
    }

    fn backspace(&mut self) {
        match self.field {
            VesselField::Name => {
                self.draft.name.pop();
            }
            VesselField::Description => {
                self.draft.description.pop();
            }
            VesselField::ScheduledDate => {
                self.date_text.pop();
            }
            VesselField::Capacity => {
                let mut candidate = self.capacity_text.clone();
                candidate.pop();
                self.set_capacity(candidate);
            }
        }
    }

    /// 数字输入语义：每次按键都转换；非数字的按键被拒绝，空值存为 0
    fn set_capacity(&mut self, candidate: String) {
        let Some(value) = coerce_number(&candidate) else {
            return;
        };
        self.draft.capacity = value;
        self.capacity_text = if candidate.trim().is_empty() {
            "0".to_string()
        } else {
            candidate
        };
    }

    /// 待提交的完整记录；无效日期保持原值
    fn to_record(&self) -> Vessel {
        let mut record = self.draft.clone();
        if let Some(date) = parse_date(&self.date_text) {
            record.scheduled_date = Some(date);
        }
        record
    }
}

/// 选中行所处的子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Browse,
    Edit,
    ConfirmDelete,
}

/// 表格状态
#[derive(Debug, Clone, Default)]
pub struct VesselTable {
    pub schema: RecordSchema,
    pub selected: usize,
    pub editing: Option<RowEdit>,
    /// 等待确认删除的行 id；同一时间最多一行
    pub delete_confirm: Option<i64>,
    pub deleting: bool,
}

impl VesselTable {
    pub fn new(schema: RecordSchema) -> Self {
        Self {
            schema,
            ..Self::default()
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    fn selected_id(&self, vessels: &[Vessel]) -> Option<i64> {
        vessels.get(self.selected).map(|v| v.id)
    }

    /// 编辑行不显示删除确认，所以编辑优先
    pub fn selected_mode(&self, vessels: &[Vessel]) -> RowMode {
        match self.selected_id(vessels) {
            Some(id) if self.editing.as_ref().is_some_and(|edit| edit.id == id) => RowMode::Edit,
            Some(id) if self.delete_confirm == Some(id) => RowMode::ConfirmDelete,
            _ => RowMode::Browse,
        }
    }

    /// 以选中行快照进入编辑，替换另一行未提交的编辑；
    /// 更新请求在途时不切换
    pub fn start_edit(&mut self, vessels: &[Vessel]) {
        if self.editing.as_ref().is_some_and(|edit| edit.submitting) {
            return;
        }
        if let Some(vessel) = vessels.get(self.selected) {
            self.editing = Some(RowEdit::snapshot(vessel));
        }
    }

    fn editable(&mut self) -> Option<&mut RowEdit> {
        self.editing.as_mut().filter(|edit| !edit.submitting)
    }

    pub fn edit_input(&mut self, c: char) {
        if let Some(edit) = self.editable() {
            edit.input(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(edit) = self.editable() {
            edit.backspace();
        }
    }

    pub fn edit_next_field(&mut self) {
        let fields = self.schema.fields();
        if let Some(edit) = self.editing.as_mut() {
            let index = fields.iter().position(|f| *f == edit.field).unwrap_or(0);
            edit.field = fields[(index + 1) % fields.len()];
        }
    }

    pub fn edit_prev_field(&mut self) {
        let fields = self.schema.fields();
        if let Some(edit) = self.editing.as_mut() {
            let index = fields.iter().position(|f| *f == edit.field).unwrap_or(0);
            edit.field = fields[(index + fields.len() - 1) % fields.len()];
        }
    }

    /// 确认编辑，返回待更新的完整记录
    pub fn commit_edit(&mut self) -> Option<Vessel> {
        let edit = self.editable()?;
        edit.submitting = true;
        Some(edit.to_record())
    }

    pub fn cancel_edit(&mut self) {
        if self.editing.as_ref().is_some_and(|edit| !edit.submitting) {
            self.editing = None;
        }
    }

    pub fn on_update_succeeded(&mut self, id: i64) {
        if self.editing.as_ref().is_some_and(|edit| edit.id == id) {
            self.editing = None;
        }
    }

    pub fn on_update_failed(&mut self, id: i64) {
        if let Some(edit) = self.editing.as_mut().filter(|edit| edit.id == id) {
            edit.submitting = false;
        }
    }

    /// 删除第一步：选中行进入确认，替换其他行的确认；
    /// 删除请求在途或选中行正在编辑时忽略
    pub fn request_delete(&mut self, vessels: &[Vessel]) {
        if self.deleting {
            return;
        }
        let Some(id) = self.selected_id(vessels) else {
            return;
        };
        if self.editing.as_ref().is_some_and(|edit| edit.id == id) {
            return;
        }
        self.delete_confirm = Some(id);
    }

    /// 删除第二步：返回要删除的 id
    pub fn confirm_delete(&mut self) -> Option<i64> {
        if self.deleting {
            return None;
        }
        let id = self.delete_confirm?;
        self.deleting = true;
        Some(id)
    }

    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.delete_confirm = None;
        }
    }

    pub fn on_delete_succeeded(&mut self, id: i64) {
        self.deleting = false;
        if self.delete_confirm == Some(id) {
            self.delete_confirm = None;
        }
    }

    pub fn on_delete_failed(&mut self) {
        self.deleting = false;
    }

    /// 列表刷新后：修正选择，丢弃已不存在行的编辑和确认
    pub fn sync(&mut self, vessels: &[Vessel]) {
        if self.selected >= vessels.len() {
            self.selected = vessels.len().saturating_sub(1);
        }
        let exists = |id: i64| vessels.iter().any(|v| v.id == id);
        if self.editing.as_ref().is_some_and(|edit| !exists(edit.id)) {
            self.editing = None;
        }
        if self.delete_confirm.is_some_and(|id| !exists(id)) && !self.deleting {
            self.delete_confirm = None;
        }
    }

    pub fn is_confirming_row(&self, id: i64) -> bool {
        self.delete_confirm == Some(id)
    }
}
