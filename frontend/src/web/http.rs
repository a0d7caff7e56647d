//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 [`HttpClient`] 接口。

use async_trait::async_trait;
use js_sys::{Array, Uint8Array};
use throwafit::request::{HttpBody, HttpClient, HttpError, HttpRequest, HttpResponse, MultipartForm};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

/// 基于浏览器 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchClient;

fn build_error(e: JsValue) -> HttpError {
    HttpError::RequestBuildFailed(format!("{:?}", e))
}

/// 构建 FormData，文件字段包装为 Blob
fn form_data(form: &MultipartForm) -> Result<FormData, HttpError> {
    let data = FormData::new().map_err(build_error)?;

    for (key, value) in &form.fields {
        data.append_with_str(key, value).map_err(build_error)?;
    }

    for file in &form.files {
        let bytes = Uint8Array::from(file.bytes.as_slice());
        let parts = Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&file.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(build_error)?;
        data.append_with_blob_and_filename(&file.field, &blob, &file.file_name)
            .map_err(build_error)?;
    }

    Ok(data)
}

async fn read_text(response: &Response) -> Result<String, HttpError> {
    let promise = response
        .text()
        .map_err(|e| HttpError::ResponseReadFailed(format!("{:?}", e)))?;

    let text = JsFuture::from(promise)
        .await
        .map_err(|e| HttpError::ResponseReadFailed(format!("{:?}", e)))?;

    text.as_string()
        .ok_or_else(|| HttpError::ResponseReadFailed("response body is not text".to_string()))
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let headers = Headers::new().map_err(build_error)?;
        for (key, value) in &req.headers {
            headers.set(key, value).map_err(build_error)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        match &req.body {
            Some(HttpBody::Json(body)) => opts.set_body(&JsValue::from_str(body)),
            // Content-Type 与 boundary 由浏览器生成
            Some(HttpBody::Multipart(form)) => opts.set_body(&form_data(form)?.into()),
            None => {}
        }

        let request = Request::new_with_str_and_init(&req.url, &opts).map_err(build_error)?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::NetworkError("window is not available".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::NetworkError(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::ResponseReadFailed(format!("{:?}", e)))?;

        Ok(HttpResponse {
            status: response.status(),
            body: read_text(&response).await?,
        })
    }
}
