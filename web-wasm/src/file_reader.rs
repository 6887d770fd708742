//! 選択ファイルの読み込み
//!
//! FileReaderのコールバックをoneshotで待てる形にする

use futures::channel::oneshot;
use image_insight_common::{EncodedPayload, FlowError};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

/// 読み込み済みの画像
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
    pub preview_url: String,
}

impl LoadedImage {
    pub fn new(name: String, mime_type: String, bytes: Vec<u8>) -> Self {
        let preview_url = EncodedPayload::from_bytes(&bytes, &mime_type).to_data_url();
        Self {
            name,
            mime_type,
            bytes: bytes.into(),
            preview_url,
        }
    }

    /// 解析リクエストごとにエンコードし直す
    pub fn encode(&self) -> EncodedPayload {
        EncodedPayload::from_bytes(&self.bytes, &self.mime_type)
    }
}

type ReadSender = Rc<RefCell<Option<oneshot::Sender<Result<Vec<u8>, FlowError>>>>>;

fn send(tx: &ReadSender, result: Result<Vec<u8>, FlowError>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

fn reader_error() -> FlowError {
    FlowError::FileRead("FileReader error".to_string())
}

/// ファイル全体を読み込む（タイムアウトなし）
pub async fn read_file(file: &File) -> Result<LoadedImage, FlowError> {
    let js_error = |e: JsValue| FlowError::FileRead(format!("{:?}", e));

    let reader = FileReader::new().map_err(js_error)?;
    let (tx, rx) = oneshot::channel();
    let tx: ReadSender = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            let result = reader
                .result()
                .map(|buffer| js_sys::Uint8Array::new(&buffer).to_vec())
                .map_err(|e| FlowError::FileRead(format!("{:?}", e)));
            send(&tx, result);
        }) as Box<dyn FnMut(_)>)
    };

    let onerror = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            send(&tx, Err(reader_error()));
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_array_buffer(file).map_err(js_error)?;

    // コールバックはこの関数を抜けるまで生かしておく
    let bytes = rx
        .await
        .map_err(|_| FlowError::FileRead("read was aborted".to_string()))??;

    reader.set_onload(None);
    reader.set_onerror(None);
    drop(onload);
    drop(onerror);

    Ok(LoadedImage::new(file.name(), file.type_(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_image_preview_url() {
        let image = LoadedImage::new("a.png".to_string(), "image/png".to_string(), b"abc".to_vec());
        assert_eq!(image.preview_url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_loaded_image_encode() {
        let image = LoadedImage::new("a.gif".to_string(), "image/gif".to_string(), vec![]);
        let payload = image.encode();
        assert_eq!(payload.data, "");
        assert_eq!(payload.mime_type, "image/gif");
    }

    #[test]
    fn test_send_delivers_reader_error_once() {
        let (tx, mut rx) = oneshot::channel();
        let tx: ReadSender = Rc::new(RefCell::new(Some(tx)));

        send(&tx, Err(reader_error()));
        // 2回目以降は無視される
        send(&tx, Ok(vec![1, 2, 3]));

        let received = rx.try_recv().expect("送信側が破棄された");
        assert_eq!(
            received,
            Some(Err(FlowError::FileRead("FileReader error".to_string())))
        );
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn blob_file(bytes: &[u8], name: &str, mime_type: &str) -> File {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime_type);
        File::new_with_u8_array_sequence_and_options(&parts, name, &options)
            .expect("File作成失敗")
    }

    #[wasm_bindgen_test]
    async fn wasm_read_file_returns_bytes_and_type() {
        let file = blob_file(b"\x89PNG", "dot.png", "image/png");

        let image = read_file(&file).await.expect("読み込み失敗");

        assert_eq!(image.name, "dot.png");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(&image.bytes[..], b"\x89PNG");
        assert_eq!(image.encode().data, "iVBORw==");
    }

    #[wasm_bindgen_test]
    async fn wasm_read_file_empty_blob() {
        let file = blob_file(&[], "empty.gif", "image/gif");

        let image = read_file(&file).await.expect("読み込み失敗");

        assert!(image.bytes.is_empty());
        assert_eq!(image.preview_url, "data:image/gif;base64,");
    }
}
