//! Built-in per-script rune tables. Every value is plain ASCII.

use phf::phf_map;

/// Latin letters with no canonical decomposition to an ASCII base.
pub static LATIN: phf::Map<char, &'static str> = phf_map! {
    'ß' => "ss",
    'ẞ' => "SS",
    'Æ' => "AE",
    'æ' => "ae",
    'Œ' => "OE",
    'œ' => "oe",
    'Ø' => "O",
    'ø' => "o",
    'Đ' => "D",
    'đ' => "d",
    'Ð' => "D",
    'ð' => "d",
    'Þ' => "Th",
    'þ' => "th",
    'Ł' => "L",
    'ł' => "l",
    'Ħ' => "H",
    'ħ' => "h",
    'ı' => "i",
    'Ŀ' => "L",
    'ŀ' => "l",
    'ŉ' => "n",
    'Ŋ' => "Ng",
    'ŋ' => "ng",
    'ſ' => "s",
    'Ŧ' => "T",
    'ŧ' => "t",
    'ƒ' => "f",
    'Ə' => "E",
    'ə' => "e",
};

/// Russian letters, plus the additional Ukrainian, Belarusian and Serbian
/// ones.
pub static CYRILLIC: phf::Map<char, &'static str> = phf_map! {
    'А' => "A", 'Б' => "B", 'В' => "V", 'Г' => "G", 'Д' => "D",
    'Е' => "E", 'Ё' => "Yo", 'Ж' => "Zh", 'З' => "Z", 'И' => "I",
    'Й' => "Y", 'К' => "K", 'Л' => "L", 'М' => "M", 'Н' => "N",
    'О' => "O", 'П' => "P", 'Р' => "R", 'С' => "S", 'Т' => "T",
    'У' => "U", 'Ф' => "F", 'Х' => "Kh", 'Ц' => "Ts", 'Ч' => "Ch",
    'Ш' => "Sh", 'Щ' => "Shch", 'Ъ' => "", 'Ы' => "Y", 'Ь' => "",
    'Э' => "E", 'Ю' => "Yu", 'Я' => "Ya",
    'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'д' => "d",
    'е' => "e", 'ё' => "yo", 'ж' => "zh", 'з' => "z", 'и' => "i",
    'й' => "y", 'к' => "k", 'л' => "l", 'м' => "m", 'н' => "n",
    'о' => "o", 'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t",
    'у' => "u", 'ф' => "f", 'х' => "kh", 'ц' => "ts", 'ч' => "ch",
    'ш' => "sh", 'щ' => "shch", 'ъ' => "", 'ы' => "y", 'ь' => "",
    'э' => "e", 'ю' => "yu", 'я' => "ya",
    'Є' => "Ye", 'є' => "ye", 'І' => "I", 'і' => "i", 'Ї' => "Yi",
    'ї' => "yi", 'Ґ' => "G", 'ґ' => "g", 'Ў' => "U", 'ў' => "u",
    'Ђ' => "Dj", 'ђ' => "dj", 'Ј' => "J", 'ј' => "j", 'Љ' => "Lj",
    'љ' => "lj", 'Њ' => "Nj", 'њ' => "nj", 'Ћ' => "C", 'ћ' => "c",
    'Џ' => "Dz", 'џ' => "dz", 'Ѕ' => "Dz", 'ѕ' => "dz", 'Ќ' => "Kj",
    'ќ' => "kj", 'Ѓ' => "Gj", 'ѓ' => "gj",
};

/// Unaccented Greek; accented vowels reach this table through
/// decomposition.
pub static GREEK: phf::Map<char, &'static str> = phf_map! {
    'Α' => "A", 'Β' => "B", 'Γ' => "G", 'Δ' => "D", 'Ε' => "E",
    'Ζ' => "Z", 'Η' => "H", 'Θ' => "Th", 'Ι' => "I", 'Κ' => "K",
    'Λ' => "L", 'Μ' => "M", 'Ν' => "N", 'Ξ' => "X", 'Ο' => "O",
    'Π' => "P", 'Ρ' => "R", 'Σ' => "S", 'Τ' => "T", 'Υ' => "Y",
    'Φ' => "Ph", 'Χ' => "Ch", 'Ψ' => "Ps", 'Ω' => "O",
    'α' => "a", 'β' => "b", 'γ' => "g", 'δ' => "d", 'ε' => "e",
    'ζ' => "z", 'η' => "h", 'θ' => "th", 'ι' => "i", 'κ' => "k",
    'λ' => "l", 'μ' => "m", 'ν' => "n", 'ξ' => "x", 'ο' => "o",
    'π' => "p", 'ρ' => "r", 'σ' => "s", 'ς' => "s", 'τ' => "t",
    'υ' => "y", 'φ' => "ph", 'χ' => "ch", 'ψ' => "ps", 'ω' => "o",
};

/// Arabic consonants and hamza carriers, the extra Persian and Urdu
/// letters, and Arabic-Indic digits.
pub static ARABIC: phf::Map<char, &'static str> = phf_map! {
    'ا' => "a", 'ب' => "b", 'ت' => "t", 'ث' => "th", 'ج' => "j",
    'ح' => "h", 'خ' => "kh", 'د' => "d", 'ذ' => "dh", 'ر' => "r",
    'ز' => "z", 'س' => "s", 'ش' => "sh", 'ص' => "s", 'ض' => "d",
    'ط' => "t", 'ظ' => "z", 'ع' => "'", 'غ' => "gh", 'ف' => "f",
    'ق' => "q", 'ك' => "k", 'ل' => "l", 'م' => "m", 'ن' => "n",
    'ه' => "h", 'و' => "w", 'ي' => "y",
    'ء' => "'", 'آ' => "aa", 'أ' => "a", 'إ' => "i", 'ؤ' => "u",
    'ئ' => "i", 'ة' => "h", 'ى' => "a", 'ـ' => "",
    'پ' => "p", 'چ' => "ch", 'ژ' => "zh", 'گ' => "g", 'ک' => "k",
    'ی' => "y", 'ٹ' => "t", 'ڈ' => "d", 'ڑ' => "r", 'ں' => "n",
    'ھ' => "h", 'ے' => "e",
    '٠' => "0", '١' => "1", '٢' => "2", '٣' => "3", '٤' => "4",
    '٥' => "5", '٦' => "6", '٧' => "7", '٨' => "8", '٩' => "9",
    '۰' => "0", '۱' => "1", '۲' => "2", '۳' => "3", '۴' => "4",
    '۵' => "5", '۶' => "6", '۷' => "7", '۸' => "8", '۹' => "9",
};

pub static HEBREW: phf::Map<char, &'static str> = phf_map! {
    'א' => "", 'ב' => "b", 'ג' => "g", 'ד' => "d", 'ה' => "h",
    'ו' => "v", 'ז' => "z", 'ח' => "ch", 'ט' => "t", 'י' => "y",
    'כ' => "k", 'ך' => "kh", 'ל' => "l", 'מ' => "m", 'ם' => "m",
    'נ' => "n", 'ן' => "n", 'ס' => "s", 'ע' => "", 'פ' => "p",
    'ף' => "f", 'צ' => "ts", 'ץ' => "ts", 'ק' => "k", 'ר' => "r",
    'ש' => "sh", 'ת' => "t",
};

pub static THAI: phf::Map<char, &'static str> = phf_map! {
    'ก' => "k", 'ข' => "kh", 'ฃ' => "kh", 'ค' => "kh", 'ฅ' => "kh",
    'ฆ' => "kh", 'ง' => "ng", 'จ' => "ch", 'ฉ' => "ch", 'ช' => "ch",
    'ซ' => "s", 'ฌ' => "ch", 'ญ' => "y", 'ฎ' => "d", 'ฏ' => "t",
    'ฐ' => "th", 'ฑ' => "th", 'ฒ' => "th", 'ณ' => "n", 'ด' => "d",
    'ต' => "t", 'ถ' => "th", 'ท' => "th", 'ธ' => "th", 'น' => "n",
    'บ' => "b", 'ป' => "p", 'ผ' => "ph", 'ฝ' => "f", 'พ' => "ph",
    'ฟ' => "f", 'ภ' => "ph", 'ม' => "m", 'ย' => "y", 'ร' => "r",
    'ฤ' => "rue", 'ล' => "l", 'ฦ' => "lue", 'ว' => "w", 'ศ' => "s",
    'ษ' => "s", 'ส' => "s", 'ห' => "h", 'ฬ' => "l", 'อ' => "",
    'ฮ' => "h",
    'ะ' => "a", 'ั' => "a", 'า' => "a", 'ำ' => "am", 'ิ' => "i",
    'ี' => "i", 'ึ' => "ue", 'ื' => "ue", 'ุ' => "u", 'ู' => "u",
    'เ' => "e", 'แ' => "ae", 'โ' => "o", 'ใ' => "ai", 'ไ' => "ai",
    '็' => "", 'ๅ' => "", 'ๆ' => "",
    '๐' => "0", '๑' => "1", '๒' => "2", '๓' => "3", '๔' => "4",
    '๕' => "5", '๖' => "6", '๗' => "7", '๘' => "8", '๙' => "9",
};

/// Pinyin readings for ideographs common in personal names, in both
/// simplified and traditional forms.
pub static HANZI: phf::Map<char, &'static str> = phf_map! {
    // Family names
    '李' => "Li", '王' => "Wang", '张' => "Zhang", '張' => "Zhang",
    '刘' => "Liu", '劉' => "Liu", '陈' => "Chen", '陳' => "Chen",
    '杨' => "Yang", '楊' => "Yang", '赵' => "Zhao", '趙' => "Zhao",
    '黄' => "Huang", '黃' => "Huang", '周' => "Zhou", '吴' => "Wu",
    '吳' => "Wu", '徐' => "Xu", '孙' => "Sun", '孫' => "Sun",
    '胡' => "Hu", '朱' => "Zhu", '高' => "Gao", '林' => "Lin",
    '何' => "He", '郭' => "Guo", '马' => "Ma", '馬' => "Ma",
    '罗' => "Luo", '羅' => "Luo", '梁' => "Liang", '宋' => "Song",
    '郑' => "Zheng", '鄭' => "Zheng", '谢' => "Xie", '謝' => "Xie",
    '韩' => "Han", '韓' => "Han", '唐' => "Tang", '冯' => "Feng",
    '馮' => "Feng", '于' => "Yu", '董' => "Dong", '萧' => "Xiao",
    '蕭' => "Xiao", '程' => "Cheng", '曹' => "Cao", '袁' => "Yuan",
    '邓' => "Deng", '鄧' => "Deng", '许' => "Xu", '許' => "Xu",
    '傅' => "Fu", '沈' => "Shen", '曾' => "Zeng", '彭' => "Peng",
    '吕' => "Lu", '呂' => "Lu", '蔡' => "Cai", '潘' => "Pan",
    '杜' => "Du", '叶' => "Ye", '葉' => "Ye", '蒋' => "Jiang",
    '蔣' => "Jiang", '毛' => "Mao", '田' => "Tian", '钟' => "Zhong",
    '鍾' => "Zhong",
    // Given-name characters
    '小' => "Xiao", '大' => "Da", '中' => "Zhong", '文' => "Wen",
    '明' => "Ming", '华' => "Hua", '華' => "Hua", '建' => "Jian",
    '国' => "Guo", '國' => "Guo", '民' => "Min", '伟' => "Wei",
    '偉' => "Wei", '龙' => "Long", '龍' => "Long", '凤' => "Feng",
    '鳳' => "Feng", '玉' => "Yu", '金' => "Jin", '春' => "Chun",
    '红' => "Hong", '紅' => "Hong", '军' => "Jun", '軍' => "Jun",
    '强' => "Qiang", '強' => "Qiang", '云' => "Yun", '雲' => "Yun",
    '平' => "Ping", '志' => "Zhi", '刚' => "Gang", '剛' => "Gang",
    '勇' => "Yong", '磊' => "Lei", '娜' => "Na", '静' => "Jing",
    '靜' => "Jing", '丽' => "Li", '麗' => "Li", '敏' => "Min",
    '秀' => "Xiu", '英' => "Ying", '芳' => "Fang", '燕' => "Yan",
    '雪' => "Xue", '琴' => "Qin", '梅' => "Mei", '莉' => "Li",
    '兰' => "Lan", '蘭' => "Lan", '翠' => "Cui", '德' => "De",
    '成' => "Cheng", '家' => "Jia", '子' => "Zi", '美' => "Mei",
    '海' => "Hai", '山' => "Shan", '天' => "Tian", '光' => "Guang",
    '永' => "Yong", '安' => "An", '和' => "He", '新' => "Xin",
    '长' => "Chang", '長' => "Chang", '宇' => "Yu", '杰' => "Jie",
    '傑' => "Jie", '涛' => "Tao", '濤' => "Tao", '辉' => "Hui",
    '輝' => "Hui", '嘉' => "Jia", '思' => "Si", '欣' => "Xin",
    '婷' => "Ting", '慧' => "Hui", '晓' => "Xiao", '曉' => "Xiao",
    '东' => "Dong", '東' => "Dong", '南' => "Nan", '西' => "Xi",
    '北' => "Bei",
    // Numerals
    '一' => "Yi", '二' => "Er", '三' => "San", '四' => "Si",
    '五' => "Wu", '六' => "Liu", '七' => "Qi", '八' => "Ba",
    '九' => "Jiu", '十' => "Shi",
};

/// Hiragana; katakana is folded onto this table before lookup.
pub static KANA: phf::Map<char, &'static str> = phf_map! {
    'あ' => "a", 'い' => "i", 'う' => "u", 'え' => "e", 'お' => "o",
    'か' => "ka", 'き' => "ki", 'く' => "ku", 'け' => "ke", 'こ' => "ko",
    'が' => "ga", 'ぎ' => "gi", 'ぐ' => "gu", 'げ' => "ge", 'ご' => "go",
    'さ' => "sa", 'し' => "shi", 'す' => "su", 'せ' => "se", 'そ' => "so",
    'ざ' => "za", 'じ' => "ji", 'ず' => "zu", 'ぜ' => "ze", 'ぞ' => "zo",
    'た' => "ta", 'ち' => "chi", 'つ' => "tsu", 'て' => "te", 'と' => "to",
    'だ' => "da", 'ぢ' => "ji", 'づ' => "zu", 'で' => "de", 'ど' => "do",
    'な' => "na", 'に' => "ni", 'ぬ' => "nu", 'ね' => "ne", 'の' => "no",
    'は' => "ha", 'ひ' => "hi", 'ふ' => "fu", 'へ' => "he", 'ほ' => "ho",
    'ば' => "ba", 'び' => "bi", 'ぶ' => "bu", 'べ' => "be", 'ぼ' => "bo",
    'ぱ' => "pa", 'ぴ' => "pi", 'ぷ' => "pu", 'ぺ' => "pe", 'ぽ' => "po",
    'ま' => "ma", 'み' => "mi", 'む' => "mu", 'め' => "me", 'も' => "mo",
    'や' => "ya", 'ゆ' => "yu", 'よ' => "yo",
    'ら' => "ra", 'り' => "ri", 'る' => "ru", 'れ' => "re", 'ろ' => "ro",
    'わ' => "wa", 'ゐ' => "wi", 'ゑ' => "we", 'を' => "wo", 'ん' => "n",
    'ぁ' => "a", 'ぃ' => "i", 'ぅ' => "u", 'ぇ' => "e", 'ぉ' => "o",
    'ゃ' => "ya", 'ゅ' => "yu", 'ょ' => "yo", 'ゎ' => "wa", 'っ' => "",
    'ゔ' => "vu", 'ゕ' => "ka", 'ゖ' => "ke", 'ー' => "", '・' => " ",
};

/// Punctuation with a conventional ASCII spelling.
pub static PUNCTUATION: phf::Map<char, &'static str> = phf_map! {
    '\u{201C}' => "\"", '\u{201D}' => "\"", '\u{201E}' => "\"",
    '\u{2018}' => "'", '\u{2019}' => "'", '\u{201A}' => "'",
    '\u{2026}' => "...", '\u{2013}' => "-", '\u{2014}' => "-",
    '\u{2010}' => "-", '\u{2011}' => "-", '\u{2212}' => "-",
    '«' => "\"", '»' => "\"", '\u{2022}' => "*", '·' => ".",
    '¡' => "!", '¿' => "?", '،' => ",", '؛' => ";", '؟' => "?",
    '、' => ",", '。' => ".", '「' => "\"", '」' => "\"",
    '『' => "\"", '』' => "\"", '（' => "(", '）' => ")",
    '，' => ",", '：' => ":", '；' => ";", '！' => "!", '？' => "?",
};
