//! 内容提取模块
//!
//! 此模块负责：
//! - 解析抓取到的HTML为DOM
//! - 按结构标记定位翻译候选词容器和例句块
//! - 把区域文本归一化为干净的行/段落记录
//!
//! 区域缺失不是错误：单词在某个方向上不可翻译是常见结果，
//! 相应的提取操作退化为空序列。

// 第三方crate导入
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

// 本地模块导入
use crate::error::{Result, TranslateError};
use crate::site_constants::{display_config, reverso_config};
use crate::translate_error;

/// 解析HTML文本为DOM
pub fn parse_html(html: &str) -> Result<RcDom> {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| translate_error!(html_parse, format!("{:?}", e)))
}

/// 深度优先查找属性精确匹配的元素
///
/// 返回顺序即文档顺序，区域提取的排序契约依赖这一点
pub fn find_by_attr(root: &Handle, tag_name: &str, attr_name: &str, attr_value: &str) -> Vec<Handle> {
    let mut matches = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Element { ref name, ref attrs, .. } = node.data {
            if name.local.as_ref() == tag_name {
                for attr in attrs.borrow().iter() {
                    let value: &str = &attr.value;
                    if attr.name.local.as_ref() == attr_name && value == attr_value {
                        matches.push(node.clone());
                        break;
                    }
                }
            }
        }

        // 逆序入栈保证弹出顺序为文档顺序
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    matches
}

/// 深度优先查找class列表包含指定类名的元素
///
/// class属性按空白拆分后匹配，多class元素同样命中
pub fn find_by_class(root: &Handle, tag_name: &str, class_name: &str) -> Vec<Handle> {
    let mut matches = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Element { ref name, ref attrs, .. } = node.data {
            if name.local.as_ref() == tag_name {
                for attr in attrs.borrow().iter() {
                    let value: &str = &attr.value;
                    if attr.name.local.as_ref() == "class"
                        && value.split_whitespace().any(|class| class == class_name)
                    {
                        matches.push(node.clone());
                        break;
                    }
                }
            }
        }

        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    matches
}

/// 拼接节点及其后代的全部文本，保持文档顺序
pub fn collect_text(node: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![node.clone()];

    while let Some(current) = stack.pop() {
        if let NodeData::Text { ref contents } = current.data {
            text.push_str(&contents.borrow());
        }

        for child in current.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    text
}

/// 定位翻译候选词容器（原始节点形式）
pub fn translation_regions(dom: &RcDom) -> Vec<Handle> {
    find_by_attr(
        &dom.document,
        "div",
        "id",
        reverso_config::TRANSLATIONS_CONTAINER_ID,
    )
}

/// 定位全部例句块（原始节点形式），保持文档顺序
pub fn example_regions(dom: &RcDom) -> Vec<Handle> {
    find_by_class(&dom.document, "div", reverso_config::EXAMPLE_BLOCK_CLASS)
}

/// 提取归一化后的翻译候选词列表
///
/// 容器缺失时返回空列表，这是驱动层判断"单词未找到"的哨兵。
/// 归一化：剔除10空格缩进痕迹，按换行拆分，丢弃空行，保持顺序。
pub fn extract_tags(html: &str) -> Result<Vec<String>> {
    let dom = parse_html(html)?;
    let regions = translation_regions(&dom);

    let region = match regions.first() {
        Some(region) => region,
        None => return Ok(Vec::new()),
    };

    let text = collect_text(region).replace(display_config::INDENT_ARTIFACT, "");
    let tags = text
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(tags)
}

/// 提取归一化后的例句列表，每个例句块一条记录
///
/// 归一化：去除首尾空白，把连续5个换行的空行痕迹折叠为单个换行，
/// 再剔除10空格缩进痕迹。块间顺序即文档顺序。
pub fn extract_examples(html: &str) -> Result<Vec<String>> {
    let dom = parse_html(html)?;

    let examples = example_regions(&dom)
        .iter()
        .map(|region| {
            collect_text(region)
                .trim()
                .replace(display_config::BLANK_RUN_ARTIFACT, "\n")
                .replace(display_config::INDENT_ARTIFACT, "")
        })
        .collect();

    Ok(examples)
}
