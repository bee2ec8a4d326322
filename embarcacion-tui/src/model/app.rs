//! 应用主状态结构

use embarcacion_core::types::{OperationKind, RecordSchema};

use super::{Command, CreationForm, FocusPanel, OperationTicket, VesselTable, VesselsState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 记录版本
    pub schema: RecordSchema,

    /// 列表 / 横幅 / 加载状态
    pub vessels: VesselsState,
    /// 创建表单
    pub form: CreationForm,
    /// 行内编辑表格
    pub table: VesselTable,

    /// 等待主循环派发的命令
    commands: Vec<Command>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(schema: RecordSchema) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Table,
            schema,
            vessels: VesselsState::new(),
            form: CreationForm::new(schema),
            table: VesselTable::new(schema),
            commands: Vec::new(),
        }
    }

    /// 领取票据并排队一个命令
    pub fn dispatch<F>(&mut self, kind: OperationKind, build: F)
    where
        F: FnOnce(OperationTicket) -> Command,
    {
        let ticket = self.vessels.issue(kind);
        self.commands.push(build(ticket));
    }

    /// 取出所有待派发命令
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// 表单隐藏时焦点回到表格
    pub fn sync_focus(&mut self) {
        if !self.vessels.show_form {
            self.focus = FocusPanel::Table;
        }
    }
}
