//! HTTP Adapter Modules
//!
//! multipart/form-data 送信のためのアダプターモジュール

pub mod reqwest_upload_repository;

pub use reqwest_upload_repository::ReqwestUploadRepository;
