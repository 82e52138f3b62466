mod concurrent_calls_test;
mod search_files_test;
mod search_folders_test;
