//! 创建表单消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 向当前字段输入字符
    Input(char),
    /// 删除当前字段最后一个字符
    Backspace,
    NextField,
    PrevField,
    /// 校验并创建
    Submit,
    /// 关闭表单（cancel_form）
    Cancel,
}
