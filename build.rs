const ECC_CODEWORDS_PER_BLOCK: [[usize; 40]; 4] = [
    [
        7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28, 30,
        30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    [
        13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30, 30,
        30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24, 30,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

const ECC_BLOCKS: [[usize; 40]; 4] = [
    [
        1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12, 13,
        14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    [
        1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23,
        25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    [
        1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    [
        1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35,
        37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

// count indicator widths per version band: numeric, alphanumeric, bytes, kanji
const COUNT_WIDTHS: [[usize; 3]; 4] = [[10, 12, 14], [9, 11, 13], [8, 16, 16], [8, 10, 12]];

fn raw_data_modules(version: usize) -> usize {
    let mut result = (16 * version + 128) * version + 64;
    if version >= 2 {
        let align = version / 7 + 2;
        result -= (25 * align - 10) * align - 55;
        if version >= 7 {
            result -= 36;
        }
    }

    result
}

fn data_codewords(ec: usize, version: usize) -> usize {
    raw_data_modules(version) / 8
        - ECC_CODEWORDS_PER_BLOCK[ec][version - 1] * ECC_BLOCKS[ec][version - 1]
}

fn band(version: usize) -> usize {
    match version {
        1..=9 => 0,
        10..=26 => 1,
        _ => 2,
    }
}

fn characters(mode: usize, ec: usize, version: usize) -> usize {
    let width = COUNT_WIDTHS[mode][band(version)];
    let avail = (data_codewords(ec, version) * 8).saturating_sub(4 + width);

    let n = match mode {
        0 => avail / 10 * 3 + match avail % 10 {
            7.. => 2,
            4.. => 1,
            _ => 0,
        },
        1 => avail / 11 * 2 + (avail % 11 >= 6) as usize,
        2 => avail / 8,
        _ => avail / 13,
    };

    n.min((1 << width) - 1)
}

fn push_table(src: &mut String, name: &str, f: impl Fn(usize, usize) -> usize) {
    src.push_str("pub static ");
    src.push_str(name);
    src.push_str(":CapacityTable=[");
    for ec in 0..4 {
        src.push('[');
        for version in 1..=40 {
            src.push_str(&f(ec, version).to_string());
            src.push(',');
        }
        src.push_str("],");
    }
    src.push_str("];");
}

fn main() {
    let out_dir = std::env::var_os("OUT_DIR").unwrap();
    let dest_path = std::path::Path::new(&out_dir).join("capacity_tables.rs");

    let mut src = String::new();

    // ------------------- data codewords per level and version -------------------
    push_table(&mut src, "DATA_CODEWORDS", data_codewords);

    // ------------------- character capacities per mode -------------------
    for (mode, name) in ["NUMERIC", "ALPHANUMERIC", "BYTES", "KANJI"].iter().enumerate() {
        let table = format!("{name}_CAPACITY");
        push_table(&mut src, &table, |ec, version| characters(mode, ec, version));
    }

    std::fs::write(&dest_path, src).unwrap();
    println!("cargo::rerun-if-changed=build.rs");
}
