use serde::{Deserialize, Serialize};

// 分页查询参数（offset/limit 风格）
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
        }
    }
}

// 分页列表信封，对外字段名 from/to 为 1 起始的条目边界
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub last_page: u64,
    #[serde(rename = "from", skip_serializing_if = "Option::is_none", default)]
    pub from_item: Option<u64>,
    #[serde(rename = "to", skip_serializing_if = "Option::is_none", default)]
    pub to_item: Option<u64>,
}

/// 将一页原始记录和总数换算为分页信封
///
/// 边界语义：
/// - 数据集为空（total_count == 0 且当前页为空）：current_page 与 last_page
///   归零，from/to 缺省，调用方可据此区分"无数据"。
/// - 偏移越界（当前页为空但 total_count > 0）：current_page 按
///   ceil((offset + 1) / limit) 重新计算，from/to 缺省，last_page 保留，
///   调用方仍能看到数据集的整体规模。
/// - limit == 0 时视为单页。
///
/// 覆写必须在基础公式之后应用，后算者生效；这一先后顺序是对外契约的
/// 一部分，不要调整。
pub fn paginate<D, T, F>(
    items: Vec<D>,
    total_count: u64,
    offset: u64,
    limit: u64,
    map: F,
) -> PaginatedResponse<T>
where
    F: FnMut(D) -> T,
{
    // 基础公式
    let mut current_page = if limit > 0 { offset / limit + 1 } else { 1 };

    let mut last_page = if total_count == 0 {
        0
    } else if limit > 0 {
        total_count.div_ceil(limit)
    } else {
        1
    };

    let mut from_item = (total_count > 0).then(|| offset + 1);
    let mut to_item = (total_count > 0).then(|| (offset + limit).min(total_count));

    // 覆写：整个数据集为空
    if items.is_empty() && total_count == 0 {
        current_page = 0;
        last_page = 0;
        from_item = None;
        to_item = None;
    } else if items.is_empty() && total_count > 0 {
        // 覆写：偏移超出数据集范围，last_page 保留
        current_page = if limit > 0 {
            (offset + 1).div_ceil(limit)
        } else {
            1
        };
        from_item = None;
        to_item = None;
    }

    PaginatedResponse {
        data: items.into_iter().map(map).collect(),
        total: total_count,
        per_page: limit,
        current_page,
        last_page,
        from_item,
        to_item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<&'static str>, total: u64, offset: u64, limit: u64) -> PaginatedResponse<String> {
        paginate(items, total, offset, limit, |s| s.to_string())
    }

    #[test]
    fn test_full_middle_page() {
        let resp = page(vec!["A", "B", "C"], 25, 20, 5);
        assert_eq!(resp.current_page, 5);
        assert_eq!(resp.last_page, 5);
        assert_eq!(resp.from_item, Some(21));
        assert_eq!(resp.to_item, Some(25));
        assert_eq!(resp.total, 25);
        assert_eq!(resp.per_page, 5);
        assert_eq!(resp.data, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_first_page_bounds() {
        let resp = page(vec!["A", "B", "C"], 25, 0, 5);
        assert_eq!(resp.current_page, 1);
        assert_eq!(resp.last_page, 5);
        assert_eq!(resp.from_item, Some(1));
        assert_eq!(resp.to_item, Some(5));
    }

    #[test]
    fn test_to_item_clamped_on_last_page() {
        let resp = page(vec!["A", "B"], 12, 10, 5);
        assert_eq!(resp.current_page, 3);
        assert_eq!(resp.last_page, 3);
        assert_eq!(resp.from_item, Some(11));
        assert_eq!(resp.to_item, Some(12));
    }

    #[test]
    fn test_empty_dataset() {
        let resp = page(vec![], 0, 0, 10);
        assert_eq!(resp.current_page, 0);
        assert_eq!(resp.last_page, 0);
        assert_eq!(resp.from_item, None);
        assert_eq!(resp.to_item, None);
        assert!(resp.data.is_empty());
    }

    #[test]
    fn test_empty_dataset_with_offset() {
        // total 为 0 时，无论 offset 多大都按"无数据"处理
        let resp = page(vec![], 0, 50, 10);
        assert_eq!(resp.current_page, 0);
        assert_eq!(resp.last_page, 0);
        assert_eq!(resp.from_item, None);
        assert_eq!(resp.to_item, None);
    }

    #[test]
    fn test_offset_beyond_range() {
        let resp = page(vec![], 25, 100, 5);
        assert_eq!(resp.current_page, 21);
        assert_eq!(resp.last_page, 5);
        assert_eq!(resp.from_item, None);
        assert_eq!(resp.to_item, None);
        assert_eq!(resp.total, 25);
    }

    #[test]
    fn test_offset_just_past_end() {
        let resp = page(vec![], 10, 10, 5);
        assert_eq!(resp.current_page, 3);
        assert_eq!(resp.last_page, 2);
        assert_eq!(resp.from_item, None);
        assert_eq!(resp.to_item, None);
    }

    #[test]
    fn test_zero_limit_single_page() {
        let resp = page(vec![], 7, 0, 0);
        assert_eq!(resp.current_page, 1);
        assert_eq!(resp.last_page, 1);
        assert_eq!(resp.from_item, None);
        assert_eq!(resp.to_item, None);
    }

    #[test]
    fn test_zero_limit_empty_dataset() {
        let resp = page(vec![], 0, 0, 0);
        assert_eq!(resp.current_page, 0);
        assert_eq!(resp.last_page, 0);
    }

    #[test]
    fn test_mapping_preserves_order() {
        let resp = paginate(vec![3u64, 1, 2], 3, 0, 10, |n| n * 10);
        assert_eq!(resp.data, vec![30, 10, 20]);
        assert_eq!(resp.from_item, Some(1));
        assert_eq!(resp.to_item, Some(3));
    }

    #[test]
    fn test_wire_names_and_absent_bounds() {
        let json = serde_json::to_value(page(vec!["A"], 1, 0, 10)).unwrap();
        assert_eq!(json["from"], 1);
        assert_eq!(json["to"], 1);

        let empty = serde_json::to_value(page(vec![], 0, 0, 10)).unwrap();
        assert!(empty.get("from").is_none());
        assert!(empty.get("to").is_none());
    }

    #[test]
    fn test_page_query_defaults() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, 100);
    }
}
