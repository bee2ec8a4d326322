//! 表格消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMessage {
    // 选择
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // 行内编辑
    StartEdit,
    EditInput(char),
    EditBackspace,
    EditNextField,
    EditPrevField,
    CommitEdit,
    CancelEdit,

    // 两步删除
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
}
