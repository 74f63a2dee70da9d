pub mod delete_file;
pub mod get_download_url;
pub mod list_files;
pub mod upload_file;
