//! ページ状態（ビューモデル）
//!
//! 画像経路: Idle → Uploading → Analyzing → Showing
//! テキスト経路: Idle → Showing
//!
//! 新しいアップロード/検索のたびに世代を進め、古い世代の完了通知は捨てる。
//! 遅れて解決した古い解析が新しい結果を上書きすることはない。

use crate::analyzer::MockAnalyzer;
use crate::types::AnalysisResult;
use crate::upload::ImageHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Uploading,
    Analyzing,
    Showing,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Uploading => "uploading",
            Phase::Analyzing => "analyzing",
            Phase::Showing => "showing",
        }
    }
}

/// 現在の結果がどちらの経路から来たか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Image,
    Text,
}

/// 非同期処理の世代チケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    phase: Phase,
    image: Option<ImageHandle>,
    result: Option<AnalysisResult>,
    source: Option<ResultSource>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn source(&self) -> Option<ResultSource> {
        self.source
    }

    /// 読み込み中または解析中
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Uploading | Phase::Analyzing)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    fn next_ticket(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    /// ファイル読み込み開始（前の結果は破棄）
    pub fn begin_upload(&mut self) -> Ticket {
        self.phase = Phase::Uploading;
        self.result = None;
        self.source = None;
        self.next_ticket()
    }

    /// 読み込み完了。解析用のチケットを返す（古い読み込みなら `None`）
    pub fn image_ready(&mut self, ticket: Ticket, image: ImageHandle) -> Option<Ticket> {
        if !self.is_current(ticket) {
            return None;
        }
        self.image = Some(image);
        self.result = None;
        self.phase = Phase::Analyzing;
        Some(self.next_ticket())
    }

    /// 解析完了。最新のチケットの場合のみ反映して `true`
    pub fn finish_analysis(&mut self, ticket: Ticket, result: AnalysisResult) -> bool {
        if !self.is_current(ticket) || self.phase != Phase::Analyzing {
            return false;
        }
        self.result = Some(result);
        self.source = Some(ResultSource::Image);
        self.phase = Phase::Showing;
        true
    }

    /// 読み込み/解析失敗。画像も結果も持たない Idle に戻す
    pub fn fail_analysis(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) || !self.is_busy() {
            return false;
        }
        self.image = None;
        self.result = None;
        self.source = None;
        self.phase = Phase::Idle;
        true
    }

    /// テキスト検索。空クエリは何もしないで `false`
    ///
    /// 表示中の画像はクリアし、進行中の解析は無効になる。
    pub fn search(&mut self, analyzer: &MockAnalyzer, query: &str) -> bool {
        let Some(result) = analyzer.search(query) else {
            return false;
        };
        self.next_ticket();
        self.image = None;
        self.result = Some(result);
        self.source = Some(ResultSource::Text);
        self.phase = Phase::Showing;
        true
    }

    /// 初期状態に戻す（進行中の処理も無効）
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}
