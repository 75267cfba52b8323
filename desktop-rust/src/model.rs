#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Upload,
    History,
}

/// モーダル表示する通知（OKで閉じるまで他の操作を止める）
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self { title: "Warning", message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { title: "Error", message: message.into() }
    }
}
