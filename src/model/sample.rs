//! Built-in sample posts.
//!
//! Four posts carry fixed publication dates; the rest are dated relative to
//! "now" so the list always has recent entries.

use super::error::SourceError;
use super::post::{BlogPost, PRESENTATION_CATEGORY};
use super::source::PostSource;
use chrono::{Duration, NaiveDate, NaiveDateTime};

const AUTHOR: &str = "notoroid";

/// Hard-coded post provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSource {
    now: NaiveDateTime,
}

impl SampleSource {
    /// Sample data anchored at `now` for the relative dates.
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// The ten sample posts, in authoring order.
    pub fn posts(&self) -> Vec<BlogPost> {
        vec![
            post(
                self.at(2023, 12, 9, 14, 30),
                PRESENTATION_CATEGORY,
                "札幌iPhone開発勉強会でUVC(USB Video Class)についてのプレゼンテーションを行いました。iPadOS17以降でiPadがUVCに対応したことについて解説しています。",
                &["UVC", "USB Video Class", "iPadOS17", "プレゼン", "札幌iPhone開発勉強会"],
            ),
            post(
                self.at(2023, 8, 6, 15, 0),
                PRESENTATION_CATEGORY,
                "SwiftUI向けに整理された状態監視についてのプレゼン資料です。iOS17から利用可能となるSwiftUIの新しいObservation機能について解説しました。",
                &["SwiftUI", "Observation", "iOS17", "状態管理", "札幌iPhone開発勉強会"],
            ),
            post(
                self.at(2023, 6, 28, 14, 0),
                PRESENTATION_CATEGORY,
                "WWDC23で発表されたSwift5.9の新機能についてまとめたプレゼンテーション資料です。よせあつめSwiftシリーズとして札幌iPhone開発勉強会で発表しました。",
                &["Swift5.9", "WWDC23", "プレゼン", "Swift言語仕様"],
            ),
            post(
                self.at(2022, 12, 20, 16, 30),
                PRESENTATION_CATEGORY,
                "WWDC22で発表されたTransferableについてのプレゼン資料です。SwiftUIでのデータ転送を簡単にする新しいプロトコルについて解説しました。",
                &["Transferable", "SwiftUI", "WWDC22", "データ転送"],
            ),
            post(
                self.before(Duration::days(30)),
                "トラブルシューティング",
                "Xcodeインストール後にXPC connection interruptedエラーが発生する問題について。手動でXcodeをインストールする際、最初のディレクトリ以外に移動すると発生します。",
                &["Xcode", "トラブルシューティング", "XPC", "インストール"],
            ),
            post(
                self.before(Duration::days(45)),
                "トラブルシューティング",
                "macOS MontereでiMovieがアップデートできない問題の対処法について。NVMとiMovieを併用する際に発生するトラブルの解決方法をまとめました。",
                &["macOS", "iMovie", "アップデート", "NVM", "トラブル解決"],
            ),
            post(
                self.before(Duration::days(60)),
                "SwiftUI100行チャレンジ",
                "SwiftUIベースのプッシュ通知テストベッドコードを100行で実装しました。アプリ表示中での通知も有効にしています。",
                &["SwiftUI", "プッシュ通知", "100行チャレンジ", "テストコード"],
            ),
            post(
                self.at(2022, 6, 25, 13, 30),
                PRESENTATION_CATEGORY,
                "WWDC22で発表されたSwift5.7の言語仕様について整理したプレゼン資料です。anyとsomeキーワードを中心に解説しました。",
                &["Swift5.7", "WWDC22", "any", "some", "言語仕様"],
            ),
            post(
                self.before(Duration::hours(5)),
                "技術メモ",
                "今日は最新のSwiftUIの動向について調査しました。iOS18のベータ版で新しいAPIがいくつか追加されているようです。",
                &["SwiftUI", "iOS18", "調査", "最新情報"],
            ),
            post(
                self.before(Duration::days(7)),
                "開発日記",
                "札幌iPhone開発勉強会の次回テーマについて検討中です。Vision Proの開発環境について取り上げたいと思います。",
                &["勉強会", "Vision Pro", "企画", "開発環境"],
            ),
        ]
    }

    /// Fixed timestamp; falls back to `now` if the calendar rejects it.
    fn at(&self, year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, 0))
            .unwrap_or(self.now)
    }

    /// `now` minus `delta`; falls back to `now` on overflow.
    fn before(&self, delta: Duration) -> NaiveDateTime {
        self.now.checked_sub_signed(delta).unwrap_or(self.now)
    }
}

impl PostSource for SampleSource {
    fn load(&self) -> Result<Vec<BlogPost>, SourceError> {
        Ok(self.posts())
    }

    fn describe(&self) -> String {
        "built-in sample posts".to_string()
    }
}

fn post(publish_date: NaiveDateTime, category: &str, summary: &str, tags: &[&str]) -> BlogPost {
    BlogPost {
        publish_date,
        author: AUTHOR.to_string(),
        category: category.to_string(),
        summary: summary.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}
