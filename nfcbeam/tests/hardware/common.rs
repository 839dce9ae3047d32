#![cfg(feature = "pcsc")]

//! 共通: 実機テスト用ヘルパー
//!
//! `--features pcsc` でコンパイルされる実機テスト用。リーダーが無い環境
//! (CI 等) では `Ok(None)` を返す。

use nfcbeam::device::{Device, Initialized};
use nfcbeam::{Error, Result};

/// ACR122 を開いて初期化した `Device<Initialized>` を返す。
///
/// - Ok(Some(device)) : リーダーが見つかり初期化に成功
/// - Ok(None) : リーダーが見つからない
/// - Err(e) : その他の致命的なエラー
pub fn open_and_initialize_device() -> Result<Option<Device<Initialized>>> {
    match Device::open() {
        Ok(device) => Ok(Some(device.initialize_with_defaults()?)),
        Err(Error::Initialization(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
