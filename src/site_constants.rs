/// 翻译站点配置常量
///
/// 该文件定义了所有上游站点和展示格式相关的常量配置，方便统一管理和维护

/// 翻译页面配置
pub mod reverso_config {
    /// 翻译页面基础地址，后接 `<src>-<target>/<word>` 两段路径
    pub const TRANSLATION_BASE_URL: &str = "https://context.reverso.net/translation";

    /// 翻译候选词容器的元素id
    pub const TRANSLATIONS_CONTAINER_ID: &str = "translations-content";

    /// 双语例句块的元素class
    pub const EXAMPLE_BLOCK_CLASS: &str = "example";
}

/// ISO语言列表参考页配置
pub mod iso_config {
    /// ISO 639-2语言代码列表页面地址
    pub const CODE_LIST_URL: &str = "https://www.loc.gov/standards/iso639-2/php/code_list.php";

    /// 语言行的valign属性值
    pub const LANGUAGE_ROW_VALIGN: &str = "top";

    /// 行文本按换行拆分后，英文语言名所在的字段下标
    pub const ENGLISH_NAME_FIELD: usize = 3;
}

/// 支持的语言配置
pub mod catalog_config {
    /// 支持的语言列表，顺序决定菜单编号和"all"模式的遍历顺序
    pub const SUPPORTED_LANGUAGES: &[&str] = &[
        "Arabic", "German", "English", "Spanish", "French", "Hebrew", "Japanese",
        "Dutch", "Polish", "Portuguese", "Romanian", "Russian", "Turkish",
    ];

    /// 菜单编号0对应的哨兵项，不是可抓取的语言
    pub const ALL_TARGETS_SENTINEL: &str = "All";
}

/// 展示与文本归一化配置
pub mod display_config {
    /// 单语言模式下展示的条目上限
    pub const SINGLE_TARGET_LIMIT: usize = 5;

    /// 全语言模式下展示的条目上限
    pub const ALL_TARGETS_LIMIT: usize = 1;

    /// 页面文本中的固定缩进痕迹（10个空格），需要整体剔除
    pub const INDENT_ARTIFACT: &str = "          ";

    /// 例句文本中的空行痕迹（连续5个换行），折叠为单个换行
    pub const BLANK_RUN_ARTIFACT: &str = "\n\n\n\n\n";

    /// 例句分组大小，每组之后插入一个空行
    pub const EXAMPLE_GROUP_SIZE: usize = 2;
}

/// 网页抓取配置
pub mod fetch_config {
    /// 默认User-Agent，上游站点拒绝无浏览器标识的请求
    pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

    /// 请求超时时间（秒）
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;
}

/// 用户可见消息
pub mod messages {
    /// 交互菜单的问候语
    pub const GREETING: &str = "Hello, you're welcome to the translator. Translator supports:";

    /// 参考语言列表获取失败时的提示
    pub const CONNECTION_ERROR: &str = "Something wrong with your internet connection";

    /// 语言被识别但不受支持时的提示
    pub fn unsupported_language(language: &str) -> String {
        format!("Sorry, the program doesn't support {}", language)
    }

    /// 单词无法翻译时的提示
    pub fn word_not_found(word: &str) -> String {
        format!("Sorry, unable to find {}", word)
    }
}

/// 实用工具函数
/// 根据待翻译单词生成输出文件名
pub fn output_file_name(word: &str) -> String {
    format!("{}.txt", word)
}
