//! 船只列表（控制器）状态
//!
//! 每个远程操作在派发时领取一张 [`OperationTicket`]：
//! - 加载状态由“在途票据”集合推导，而不是一个共享布尔值
//! - 错误横幅记住引发它的票据：成功只清除更早票据的横幅，
//!   失败只覆盖更早票据的横幅

use std::collections::BTreeMap;

use embarcacion_core::types::{OperationKind, Vessel};

/// 一次已派发远程操作的身份
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationTicket {
    /// 单调递增的序号
    pub seq: u64,
    pub kind: OperationKind,
}

/// 错误横幅
///
/// `kind` 决定显示的文案；变更成功但随后的整表获取失败时，
/// `kind` 为 `Fetch`，`ticket` 仍是变更自己的票据。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub ticket: OperationTicket,
    pub kind: OperationKind,
}

/// 船只列表状态
#[derive(Debug, Default)]
pub struct VesselsState {
    /// 最近一次成功获取的完整列表
    pub vessels: Vec<Vessel>,
    /// 当前错误横幅
    pub banner: Option<Banner>,
    /// 创建表单是否显示
    pub show_form: bool,
    /// 通过 begin_edit 暂存的记录
    pub editing: Option<Vessel>,
    in_flight: BTreeMap<u64, OperationKind>,
    next_seq: u64,
}

impl VesselsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 领取票据并登记为在途
    pub fn issue(&mut self, kind: OperationKind) -> OperationTicket {
        self.next_seq += 1;
        let ticket = OperationTicket {
            seq: self.next_seq,
            kind,
        };
        self.in_flight.insert(ticket.seq, kind);
        ticket
    }

    /// 操作结束（无论成败）
    pub fn settle(&mut self, ticket: OperationTicket) {
        self.in_flight.remove(&ticket.seq);
    }

    /// 是否有操作在途
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// 以获取结果整体替换列表
    pub fn replace_list(&mut self, ticket: OperationTicket, vessels: Vec<Vessel>) {
        self.vessels = vessels;
        self.clear_banner_before(ticket);
    }

    /// 成功：只清除更早票据引发的横幅
    pub fn clear_banner_before(&mut self, ticket: OperationTicket) {
        if self
            .banner
            .is_some_and(|banner| banner.ticket.seq < ticket.seq)
        {
            self.banner = None;
        }
    }

    /// 失败：没有横幅或横幅来自更早票据时才覆盖
    pub fn raise(&mut self, ticket: OperationTicket, kind: OperationKind) {
        let replace = self
            .banner
            .is_none_or(|banner| banner.ticket.seq < ticket.seq);
        if replace {
            self.banner = Some(Banner { ticket, kind });
        }
    }

    /// 显示创建表单，可附带暂存记录
    pub fn open_form(&mut self, editing: Option<Vessel>) {
        self.editing = editing;
        self.show_form = true;
    }

    /// 隐藏创建表单并清除暂存记录
    pub fn close_form(&mut self) {
        self.show_form = false;
        self.editing = None;
    }
}
