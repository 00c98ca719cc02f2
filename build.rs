use chrono::Utc;

fn main() {
    // 设置构建时间，供 /api/version 使用
    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // 内置目录数据变化时重新编译 / Rebuild when the embedded catalog changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=catalog/departments.json");
}
